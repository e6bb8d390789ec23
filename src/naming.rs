//! Slug and identifier conventions shared by every renderer.
//!
//! A slug is the URL segment of a project page (`/work/{slug}/`). It must be
//! lowercase ASCII alphanumerics separated by single dashes, so it survives
//! as a directory name, a URL segment, and a fragment identifier unchanged:
//!
//! - `raanana-jazz-festival` → valid
//! - `Raanana Jazz` → invalid (uppercase, space)
//! - `jazz--posters` → invalid (empty segment)
//!
//! [`slugify`] produces a valid slug from free text and is used to derive
//! anchor ids for subsections and lightbox galleries.

/// Whether `s` is a URL-safe slug: `[a-z0-9]+(-[a-z0-9]+)*`.
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// Convert free text into a slug.
///
/// ASCII letters are lowercased, digits kept, and every run of other
/// characters collapses into a single dash. Leading and trailing dashes are
/// dropped. Text with no ASCII alphanumerics yields an empty string.
///
/// - `"Amit Friedman"` → `"amit-friedman"`
/// - `"Posters -- 2024!"` → `"posters-2024"`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// DOM id for a gallery on a project page, unique within that page.
///
/// The main gallery is `{slug}-gallery`. Subsection galleries carry their
/// 1-based position before the slugified title (`{slug}-2-alon-nir`), so
/// repeated titles and a subsection named "Gallery" stay distinct.
pub fn gallery_id(project_slug: &str, subsection: Option<(usize, &str)>) -> String {
    match subsection {
        None => format!("{}-gallery", project_slug),
        Some((index, title)) => {
            let part = slugify(title);
            if part.is_empty() {
                format!("{}-{}", project_slug, index + 1)
            } else {
                format!("{}-{}-{}", project_slug, index + 1, part)
            }
        }
    }
}
