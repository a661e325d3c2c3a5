//! Walks a structured CV and renders it section by section.
//!
//! Fixed order: header, Summary, Skills, Professional Experience,
//! Education, Certifications (the last omitted entirely when empty). The
//! engine assumes the data-model invariants hold; the only input it
//! validates is the non-empty name it needs for the export filename.

use tracing::debug;

use super::metrics::FontFace;
use super::style::StyleConfig;
use super::writer::PageWriter;
use super::RenderError;
use crate::models::cv::Cv;

/// A rendered, paginated document ready for export.
pub struct RenderedResume {
    pub bytes: Vec<u8>,
    /// `<name with whitespace collapsed to "_">_CV.pdf`
    pub filename: String,
    pub page_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ResumeRenderer {
    style: StyleConfig,
}

impl ResumeRenderer {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    pub fn render(&self, cv: &Cv) -> Result<RenderedResume, RenderError> {
        let filename = export_filename(&cv.name).ok_or(RenderError::EmptyName)?;

        let mut w = PageWriter::new(self.style, &cv.name)?;

        self.render_header(&mut w, cv);
        self.render_summary(&mut w, cv);
        self.render_skills(&mut w, cv);
        self.render_experience(&mut w, cv);
        self.render_education(&mut w, cv);
        self.render_certifications(&mut w, cv);

        let page_count = w.page_count();
        let bytes = w.finish()?;
        debug!(
            "Rendered resume for {} ({} pages, {} bytes)",
            cv.name,
            page_count,
            bytes.len()
        );

        Ok(RenderedResume {
            bytes,
            filename,
            page_count,
        })
    }

    fn render_header(&self, w: &mut PageWriter, cv: &Cv) {
        let s = self.style;

        w.text(
            &cv.name,
            s.margin,
            FontFace::Bold,
            s.sizes.name,
            s.colors.primary,
        );
        w.advance(7.0);

        w.text(
            &cv.title,
            s.margin,
            FontFace::Regular,
            s.sizes.title,
            s.colors.secondary,
        );
        w.advance(8.0);

        let contact = format!(
            "{} | {} | {} | {}",
            cv.contact.location, cv.contact.phone, cv.contact.email, cv.contact.linkedin
        );
        w.wrapped_text(
            &contact,
            s.margin,
            s.content_width(),
            FontFace::Regular,
            s.sizes.small,
            s.colors.text,
            4.0,
        );
        w.advance(s.spacing.section);
    }

    fn render_summary(&self, w: &mut PageWriter, cv: &Cv) {
        let s = self.style;
        w.section_header("Summary");
        w.ensure_space(25.0); // enough for a few lines of text
        w.wrapped_text(
            &cv.summary,
            s.margin,
            s.content_width(),
            FontFace::Regular,
            s.sizes.normal,
            s.colors.text,
            5.0,
        );
        w.advance(s.spacing.section);
    }

    fn render_skills(&self, w: &mut PageWriter, cv: &Cv) {
        let s = self.style;
        w.section_header("Skills");
        w.ensure_space(s.min_section_height);
        w.wrapped_text(
            &cv.skills.join("  •  "),
            s.margin,
            s.content_width(),
            FontFace::Regular,
            s.sizes.normal,
            s.colors.text,
            5.0,
        );
        w.advance(s.spacing.section);
    }

    fn render_experience(&self, w: &mut PageWriter, cv: &Cv) {
        let s = self.style;
        w.section_header("Professional Experience");
        w.ensure_space(s.min_section_height);

        for exp in &cv.experience {
            w.ensure_space(30.0);

            w.text(
                &exp.company,
                s.margin,
                FontFace::Bold,
                s.sizes.sub_header,
                s.colors.primary,
            );
            w.right_aligned_text(
                &exp.location,
                FontFace::Regular,
                s.sizes.small,
                s.colors.light_text,
            );
            w.advance(s.spacing.normal);

            for role in &exp.roles {
                w.ensure_space(20.0);

                w.text(
                    &role.title,
                    s.margin,
                    FontFace::Bold,
                    s.sizes.normal,
                    s.colors.secondary,
                );
                w.right_aligned_text(
                    &format!("{} - {}", role.start_date, role.end_date),
                    FontFace::Regular,
                    s.sizes.small,
                    s.colors.light_text,
                );
                w.advance(5.0);

                w.bullet_list(&role.responsibilities);
                w.advance(s.spacing.normal); // space between roles
            }

            w.advance(s.spacing.tight); // space between companies
        }

        w.advance(s.spacing.section);
    }

    fn render_education(&self, w: &mut PageWriter, cv: &Cv) {
        let s = self.style;
        w.section_header("Education");

        for edu in &cv.education {
            w.ensure_space(s.min_section_height);

            w.text(
                &edu.degree,
                s.margin,
                FontFace::Bold,
                s.sizes.sub_header,
                s.colors.primary,
            );
            w.advance(5.0);

            w.text(
                &edu.institution,
                s.margin,
                FontFace::Regular,
                s.sizes.normal,
                s.colors.text,
            );
            w.right_aligned_text(
                &format!("{} - {}", edu.start_date, edu.end_date),
                FontFace::Regular,
                s.sizes.small,
                s.colors.light_text,
            );
            w.advance(s.spacing.section);
        }
    }

    fn render_certifications(&self, w: &mut PageWriter, cv: &Cv) {
        if cv.certifications.is_empty() {
            return;
        }

        let s = self.style;
        w.section_header("Certifications");

        for cert in &cv.certifications {
            w.ensure_space(s.min_section_height);

            w.text(
                &cert.name,
                s.margin,
                FontFace::Bold,
                s.sizes.sub_header,
                s.colors.primary,
            );
            w.advance(5.0);

            w.text(
                &cert.institution,
                s.margin,
                FontFace::Regular,
                s.sizes.normal,
                s.colors.text,
            );
            w.right_aligned_text(
                &cert.date,
                FontFace::Regular,
                s.sizes.small,
                s.colors.light_text,
            );
            w.advance(s.spacing.section);
        }
    }
}

/// Collapses internal whitespace runs to single underscores and appends the
/// export suffix. Returns `None` for an all-whitespace name.
pub fn export_filename(name: &str) -> Option<String> {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join("_");
    if collapsed.is_empty() {
        return None;
    }
    Some(format!("{collapsed}_CV.pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{sample_cv, Cv, Experience, Role};

    fn renderer() -> ResumeRenderer {
        ResumeRenderer::new(StyleConfig::default())
    }

    #[test]
    fn test_export_filename_collapses_whitespace_runs() {
        assert_eq!(
            export_filename("Jane   Mary\tDoe").as_deref(),
            Some("Jane_Mary_Doe_CV.pdf")
        );
        assert_eq!(export_filename("Jane Doe").as_deref(), Some("Jane_Doe_CV.pdf"));
    }

    #[test]
    fn test_export_filename_empty_name_is_none() {
        assert_eq!(export_filename(""), None);
        assert_eq!(export_filename("   "), None);
    }

    #[test]
    fn test_render_sample_cv_produces_pdf() {
        let rendered = renderer().render(&sample_cv()).unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
        assert_eq!(rendered.filename, "Jane_Doe_CV.pdf");
        assert_eq!(rendered.page_count, 1);
    }

    #[test]
    fn test_render_empty_name_fails() {
        let mut cv = sample_cv();
        cv.name = "  ".to_string();
        let result = renderer().render(&cv);
        assert!(matches!(result, Err(RenderError::EmptyName)));
    }

    #[test]
    fn test_render_minimal_cv_with_empty_sections() {
        let cv: Cv = serde_json::from_str(r#"{"name": "Ada Lovelace"}"#).unwrap();
        let rendered = renderer().render(&cv).unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
        assert_eq!(rendered.filename, "Ada_Lovelace_CV.pdf");
    }

    #[test]
    fn test_render_long_cv_paginates() {
        let mut cv = sample_cv();
        cv.experience = (0..15)
            .map(|i| Experience {
                company: format!("Company {i}"),
                location: "Remote".to_string(),
                roles: vec![Role {
                    title: "Engineer".to_string(),
                    start_date: "2019".to_string(),
                    end_date: "2021".to_string(),
                    responsibilities: vec![
                        "Built and maintained a fleet of internal services with a small team"
                            .to_string();
                        4
                    ],
                }],
            })
            .collect();

        let rendered = renderer().render(&cv).unwrap();
        assert!(rendered.page_count > 1, "15 experiences must paginate");
    }

    #[test]
    fn test_render_without_certifications_still_renders() {
        let mut cv = sample_cv();
        cv.certifications.clear();
        let rendered = renderer().render(&cv).unwrap();
        assert!(rendered.bytes.starts_with(b"%PDF"));
    }
}
