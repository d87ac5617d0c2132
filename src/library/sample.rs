//! Built-in sample catalog.
//!
//! Eighteen posts from the EPAM insights section. The last two are copies of
//! the same podcast episode published under one URL.

use chrono::NaiveDate;

use crate::domain::{Post, PostError, PostType};

use super::catalog::Catalog;

/// Title shared by the two copies of the duplicated podcast
pub const DUPLICATE_PODCAST_TITLE: &str =
    "Joanne Chang on Designing a Delicious Customer Experience";

/// URL shared by the two copies of the duplicated podcast
pub const DUPLICATE_PODCAST_URL: &str =
    "https://www.epam.com/insights/podcasts/joanne-chang-on-designing-a-delicious-customer-experience";

const INSIGHTS: &str = "https://www.epam.com/insights";

struct Entry {
    title: &'static str,
    authors: &'static [&'static str],
    post_type: PostType,
    date: (i32, u32, u32),
    slug: &'static str,
    likes: u32,
}

const ENTRIES: &[Entry] = &[
    Entry {
        title: "Agile at Scale: Lessons from Distributed Teams",
        authors: &["Ken Gordon"],
        post_type: PostType::Blog,
        date: (2020, 3, 12),
        slug: "agile-at-scale-lessons-from-distributed-teams",
        likes: 610,
    },
    Entry {
        title: "Why Design Systems Fail",
        authors: &["Patrick Allen"],
        post_type: PostType::Blog,
        date: (2020, 5, 4),
        slug: "why-design-systems-fail",
        likes: 35,
    },
    Entry {
        title: "Engineering the Post-Pandemic Workplace",
        authors: &["Sam Rehman"],
        post_type: PostType::Blog,
        date: (2020, 10, 15),
        slug: "engineering-the-post-pandemic-workplace",
        likes: 812,
    },
    Entry {
        title: "Cloud Cost Control Without the Guesswork",
        authors: &["Lauren Paik"],
        post_type: PostType::Blog,
        date: (2020, 7, 26),
        slug: "cloud-cost-control-without-the-guesswork",
        likes: 640,
    },
    Entry {
        title: "Data Mesh in Practice",
        authors: &["Dmitry Krasovskiy"],
        post_type: PostType::Blog,
        date: (2020, 6, 18),
        slug: "data-mesh-in-practice",
        likes: 520,
    },
    Entry {
        title: "Digital Twins for Manufacturing",
        authors: &["Sam Rehman", "Lauren Paik"],
        post_type: PostType::Blog,
        date: (2020, 9, 2),
        slug: "digital-twins-for-manufacturing",
        likes: 705,
    },
    Entry {
        title: "Building Trust in Machine Learning Models",
        authors: &["Jitin Agarwal"],
        post_type: PostType::Blog,
        date: (2020, 8, 20),
        slug: "building-trust-in-machine-learning-models",
        likes: 230,
    },
    Entry {
        title: "The Future of Retail Experiences",
        authors: &["Elaina Shekhter"],
        post_type: PostType::Blog,
        date: (2020, 8, 10),
        slug: "the-future-of-retail-experiences",
        likes: 541,
    },
    Entry {
        title: "Leading Through Change",
        authors: &["Balazs Fejes"],
        post_type: PostType::Interview,
        date: (2020, 2, 20),
        slug: "leading-through-change",
        likes: 1530,
    },
    Entry {
        title: "Inside the Continuum Approach",
        authors: &["Elaina Shekhter", "Chris Brown"],
        post_type: PostType::Interview,
        date: (2020, 4, 9),
        slug: "inside-the-continuum-approach",
        likes: 1316,
    },
    Entry {
        title: "Product Thinking for Platform Teams",
        authors: &["Chris Brown"],
        post_type: PostType::Interview,
        date: (2020, 6, 30),
        slug: "product-thinking-for-platform-teams",
        likes: 1400,
    },
    Entry {
        title: "Rethinking Customer Journeys",
        authors: &["Jitin Agarwal"],
        post_type: PostType::Podcast,
        date: (2020, 1, 15),
        slug: "rethinking-customer-journeys",
        likes: 300,
    },
    Entry {
        title: "Cybersecurity Myths, Busted",
        authors: &["Balazs Fejes"],
        post_type: PostType::Podcast,
        date: (2020, 2, 27),
        slug: "cybersecurity-myths-busted",
        likes: 260,
    },
    Entry {
        title: "The Human Side of Digital Transformation",
        authors: &["Jitin Agarwal", "Patrick Allen"],
        post_type: PostType::Podcast,
        date: (2020, 5, 21),
        slug: "the-human-side-of-digital-transformation",
        likes: 720,
    },
    Entry {
        title: "Quantum Computing: Hype or Horizon?",
        authors: &["Dmitry Krasovskiy"],
        post_type: PostType::Podcast,
        date: (2020, 4, 2),
        slug: "quantum-computing-hype-or-horizon",
        likes: 180,
    },
    Entry {
        title: "Accessibility Is Everyone's Job",
        authors: &["Anna Kowalski"],
        post_type: PostType::Podcast,
        date: (2020, 6, 5),
        slug: "accessibility-is-everyones-job",
        likes: 48,
    },
    Entry {
        title: DUPLICATE_PODCAST_TITLE,
        authors: &["Ken Gordon"],
        post_type: PostType::Podcast,
        date: (2020, 9, 30),
        slug: "joanne-chang-on-designing-a-delicious-customer-experience",
        likes: 12,
    },
    Entry {
        title: DUPLICATE_PODCAST_TITLE,
        authors: &["Ken Gordon"],
        post_type: PostType::Podcast,
        date: (2020, 7, 1),
        slug: "joanne-chang-on-designing-a-delicious-customer-experience",
        likes: 1103,
    },
];

fn section(post_type: PostType) -> &'static str {
    match post_type {
        PostType::Blog => "blogs",
        PostType::Interview => "interviews",
        PostType::Podcast => "podcasts",
    }
}

/// Build the sample catalog
///
/// Fails only if an entry carries a malformed URL or date, which makes the
/// whole fixture unusable.
pub fn sample_catalog() -> Result<Catalog, PostError> {
    ENTRIES
        .iter()
        .map(|entry| {
            let (y, m, d) = entry.date;
            let url = format!("{}/{}/{}", INSIGHTS, section(entry.post_type), entry.slug);
            let date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| PostError::InvalidDate {
                title: entry.title.to_string(),
            })?;

            Post::new(
                entry.title,
                entry.authors.iter().copied(),
                entry.post_type,
                date,
                &url,
                entry.likes,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog().unwrap();

        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.filter_by_type(PostType::Blog).len(), 8);
        assert_eq!(catalog.filter_by_type(PostType::Interview).len(), 3);
        assert_eq!(catalog.filter_by_type(PostType::Podcast).len(), 7);
    }

    #[test]
    fn test_duplicate_copies_share_url_only() {
        let catalog = sample_catalog().unwrap();
        let copies: Vec<_> = catalog
            .iter()
            .filter(|p| p.url.as_str() == DUPLICATE_PODCAST_URL)
            .collect();

        assert_eq!(copies.len(), 2);
        assert_eq!(copies[0].title, copies[1].title);
        assert!(!copies[0].is_same(copies[1]));
    }

    #[test]
    fn test_each_build_assigns_new_identities() {
        let first = sample_catalog().unwrap();
        let second = sample_catalog().unwrap();

        assert_ne!(first.posts()[0].id, second.posts()[0].id);
    }
}
