//! Content population: builds the demo page's stage from the content
//! configuration.
//!
//! This is the glue collaborator around the effects core: it inserts the
//! nodes the animation layers later match via selectors (`[data-anim]`,
//! `.counter`, `.skill-bar-item`) and gives each a rect so the scroll
//! trigger has real geometry to intersect. The core never reads the
//! config; it only ever sees the nodes placed here.

use glint_config::ContentConfig;
use glint_stage::{Rect, Stage, StageNode};

pub const PAGE_WIDTH: f64 = 800.0;
const SECTION_HEIGHT: f64 = 400.0;
const SECTION_GAP: f64 = 300.0;

/// Build the whole page. Returns the total page height.
pub fn populate_stage(stage: &mut Stage, config: &ContentConfig) -> f64 {
    let mut y = 0.0;

    // Loader overlay sits above everything and fades out first.
    stage.insert(
        StageNode::new("div")
            .with_element_id("loader")
            .with_rect(Rect::new(0.0, 0.0, PAGE_WIDTH, 600.0)),
    );

    // Particle backdrop canvas, fixed to the viewport.
    stage.insert(
        StageNode::new("canvas")
            .with_element_id("backdrop")
            .with_rect(Rect::new(0.0, 0.0, PAGE_WIDTH, 600.0)),
    );

    // Hero: headline and subline revealed by the load sequence.
    for _ in 0..3 {
        stage.insert(
            StageNode::new("h1")
                .with_class("hero-item")
                .with_opacity(0.0)
                .with_rect(Rect::new(40.0, y + 120.0, 600.0, 60.0)),
        );
        y += 80.0;
    }
    y = 600.0;

    // Scroll-revealed sections.
    for anim in ["fade-up", "slide-right", "scale-in"] {
        y += SECTION_GAP;
        stage.insert(
            StageNode::new("section")
                .with_attr("data-anim", anim)
                .with_opacity(0.0)
                .with_rect(Rect::new(0.0, y, PAGE_WIDTH, SECTION_HEIGHT)),
        );
        y += SECTION_HEIGHT;
    }

    // Stat counters, one row.
    y += SECTION_GAP;
    for i in 0..4 {
        stage.insert(
            StageNode::new("span")
                .with_class("counter")
                .with_opacity(0.0)
                .with_rect(Rect::new(i as f64 * 200.0, y, 180.0, 80.0)),
        );
    }
    y += 80.0;

    // Skill bars from config.
    for skill in &config.skills {
        y += 60.0;
        stage.insert(
            StageNode::new("div")
                .with_class("skill-bar-item")
                .with_attr("data-skill", skill.display_name.clone())
                .with_attr(
                    "data-percent",
                    skill.proficiency_percent.to_string(),
                )
                .with_opacity(0.0)
                .with_rect(Rect::new(40.0, y, 600.0, 24.0)),
        );
    }

    // Logo marquee entries scroll horizontally; they share one row.
    y += SECTION_GAP;
    for (i, logo) in config.logos.iter().enumerate() {
        stage.insert(
            StageNode::new("img")
                .with_class("logo-item")
                .with_attr("data-logo", logo.display_name.clone())
                .with_rect(Rect::new(i as f64 * 160.0, y, 140.0, 60.0)),
        );
    }
    y += 100.0;

    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_config::{LogoEntry, SkillEntry};

    fn sample_config() -> ContentConfig {
        ContentConfig {
            skills: vec![
                SkillEntry {
                    display_name: "Rust".into(),
                    image_asset: "rust.png".into(),
                    proficiency_percent: 90,
                },
                SkillEntry {
                    display_name: "TypeScript".into(),
                    image_asset: "ts.png".into(),
                    proficiency_percent: 75,
                },
            ],
            logos: vec![LogoEntry {
                display_name: "Acme".into(),
                image_asset: "acme.svg".into(),
            }],
        }
    }

    #[test]
    fn test_populates_selector_targets() {
        let mut stage = Stage::new();
        let height = populate_stage(&mut stage, &sample_config());

        assert!(stage.query_first("#loader").is_some());
        assert!(stage.query_first("#backdrop").is_some());
        assert_eq!(stage.query(".hero-item").len(), 3);
        assert_eq!(stage.query("[data-anim=\"fade-up\"]").len(), 1);
        assert_eq!(stage.query(".counter").len(), 4);
        assert_eq!(stage.query(".skill-bar-item").len(), 2);
        assert_eq!(stage.query(".logo-item").len(), 1);
        assert!(height > 600.0);
    }

    #[test]
    fn test_revealed_content_starts_hidden() {
        let mut stage = Stage::new();
        populate_stage(&mut stage, &sample_config());
        for id in stage.query("[data-anim]") {
            assert_eq!(stage.get(id).unwrap().style.opacity, 0.0);
        }
    }
}
