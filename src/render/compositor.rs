//! Compositor — layers every generated fragment into one SVG document
//!
//! Layer order, back to front: background, particle field, pathways, core,
//! overlays. Stage decides the embellishments:
//! - Pulse and later: glow filter on the core
//! - Flow and later: inner echo of the core outline
//! - Nexus: dashed aura ring and glowing pathways

use super::document::Document;
use super::geometry::Point;
use super::palette::Palette;
use super::particle::{generate_particles, particles_element};
use super::pathway::{end_radius, generate_pathways, pathways_element};
use super::shape::{shape_primitives, CoreShape};
use super::svg::{fmt_num, Element, Primitive};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::evolution::{rarity_band, stage_progress, EvolutionStage, RarityBand, StageProgress};
use crate::genome::TraitRecord;
use log::debug;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT: &str = "monospace";
const MARGIN: f64 = 16.0;

/// Time-varying parameters for one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub frame: u64,
    /// Core pulse, bounded by the configured amplitude; 0 at frame 0
    pub pulse_offset: f64,
    /// Pathway rotation in degrees, in [0, 360)
    pub angle_offset: f64,
}

impl FrameParams {
    pub fn new(frame: u64, config: &RenderConfig) -> Self {
        let f = frame as f64;
        Self {
            frame,
            pulse_offset: config.pulse_amplitude * (f * config.pulse_rate).sin(),
            angle_offset: (f * config.rotation_per_frame) % 360.0,
        }
    }
}

/// Stateless renderer bound to a validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Compositor {
    config: RenderConfig,
}

impl Compositor {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `record` as it looks at `now`, on animation frame `frame`
    pub fn render(&self, record: &TraitRecord, now: u64, frame: u64) -> Result<Document> {
        let progress = stage_progress(record, now)?;
        let stage = progress.stage;
        let rarity = rarity_band(record);
        let palette = Palette::for_record(record, stage);
        let params = FrameParams::new(frame, &self.config);
        let c = self.config.center();
        let center = Point::new(c, c);
        let size = self.config.canvas_size;

        let mut svg = Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("viewBox", format!("0 0 {} {}", size, size))
            .attr("width", size.to_string())
            .attr("height", size.to_string())
            .attr("role", "img")
            .attr("aria-label", format!("Nexus #{}", record.id()))
            .child(Element::new("title").text(format!(
                "Nexus #{}, {} {}, {}",
                record.id(),
                record.core_geometry().label(),
                stage.label(),
                rarity.label()
            )))
            .child(self.defs(&palette, stage)?)
            .child(
                Element::new("rect")
                    .attr("class", "background")
                    .attr("width", size.to_string())
                    .attr("height", size.to_string())
                    .attr("fill", "url(#bg)"),
            );

        // Background layer
        let particles = generate_particles(record.network_density(), frame, center);
        let mut particle_layer = particles_element(record.particle_system(), &particles, &palette)?;
        if self.config.animate {
            particle_layer = particle_layer.child(rotation(&center, 90, true)?);
        }
        svg = svg.child(particle_layer);

        // Mid layer
        let pathways = generate_pathways(
            record.pathway_pattern(),
            record.network_density(),
            stage,
            params.angle_offset,
            center,
        );
        let mut pathway_layer = pathways_element(&pathways, &palette)?;
        if stage == EvolutionStage::Nexus {
            pathway_layer = pathway_layer.attr("filter", "url(#glow)");
        }
        if self.config.animate {
            pathway_layer = pathway_layer.child(rotation(&center, 60, false)?);
        }
        svg = svg.child(pathway_layer);

        if stage == EvolutionStage::Nexus {
            svg = svg.child(aura(&center, stage, &palette)?);
        }

        // Foreground
        let core = CoreShape::generate(record.core_geometry(), stage, params.pulse_offset, center);
        let mut core_layer = core.to_element(&palette)?;
        if stage >= EvolutionStage::Pulse {
            core_layer = core_layer.attr("filter", "url(#glow)");
        }
        svg = svg.child(core_layer);

        if stage >= EvolutionStage::Flow {
            svg = svg.child(echo(&core, &center, &palette)?);
        }

        svg = svg.children(self.overlays(record, &progress, rarity, &palette)?);

        let mut markup = String::with_capacity(8 * 1024);
        svg.write_to(&mut markup);
        debug!(
            "Rendered entity #{} stage={} frame={} bytes={}",
            record.id(),
            stage.number(),
            frame,
            markup.len()
        );
        Ok(Document::new(markup))
    }

    fn defs(&self, palette: &Palette, stage: EvolutionStage) -> Result<Element> {
        let (inner, outer) = palette.background();
        let gradient = Element::new("radialGradient")
            .attr("id", "bg")
            .attr("cx", "50%")
            .attr("cy", "50%")
            .attr("r", "70%")
            .child(Element::new("stop").attr("offset", "0%").attr("stop-color", inner.css()))
            .child(Element::new("stop").attr("offset", "100%").attr("stop-color", outer.css()));

        let blur = 1.5 + stage.number() as f64;
        let glow = Element::new("filter")
            .attr("id", "glow")
            .attr("x", "-50%")
            .attr("y", "-50%")
            .attr("width", "200%")
            .attr("height", "200%")
            .child(
                Element::new("feGaussianBlur")
                    .num("stdDeviation", blur)?
                    .attr("result", "blur"),
            )
            .child(
                Element::new("feMerge")
                    .child(Element::new("feMergeNode").attr("in", "blur"))
                    .child(Element::new("feMergeNode").attr("in", "SourceGraphic")),
            );

        Ok(Element::new("defs").child(gradient).child(glow))
    }

    fn overlays(
        &self,
        record: &TraitRecord,
        progress: &StageProgress,
        rarity: RarityBand,
        palette: &Palette,
    ) -> Result<Vec<Element>> {
        let size = self.config.canvas_size as f64;
        let mut out = Vec::new();

        out.push(
            label("stage-label", MARGIN, size - MARGIN, "start", palette.glow.css())?.text(format!(
                "Stage {}: {}",
                progress.stage.number(),
                progress.stage.label()
            )),
        );

        if rarity.is_mutated() {
            out.push(
                label("mutation-badge", size - MARGIN, MARGIN + 12.0, "end", palette.accent.css())?
                    .text(format!("Mutated: {}", rarity.label())),
            );
        }

        if record.is_enhanced_genesis() {
            out.push(genesis_badge(size, palette)?);
        }

        if self.config.show_details {
            out.push(
                label("id-label", MARGIN, MARGIN + 12.0, "start", palette.glow.css())?
                    .text(format!("#{}", record.id())),
            );
            out.push(progress_indicator(size, progress, palette)?);
        }

        Ok(out)
    }
}

/// Declarative rotation about the canvas center
fn rotation(center: &Point, seconds: u32, reverse: bool) -> Result<Element> {
    let (cx, cy) = (fmt_num(center.x)?, fmt_num(center.y)?);
    let to = if reverse { -360 } else { 360 };
    Ok(Element::new("animateTransform")
        .attr("attributeName", "transform")
        .attr("type", "rotate")
        .attr("from", format!("0 {} {}", cx, cy))
        .attr("to", format!("{} {} {}", to, cx, cy))
        .attr("dur", format!("{}s", seconds))
        .attr("repeatCount", "indefinite"))
}

fn label(class: &'static str, x: f64, y: f64, anchor: &'static str, fill: String) -> Result<Element> {
    Ok(Element::new("text")
        .attr("class", class)
        .num("x", x)?
        .num("y", y)?
        .attr("text-anchor", anchor)
        .attr("font-family", FONT)
        .attr("font-size", "12")
        .attr("fill", fill))
}

fn genesis_badge(size: f64, palette: &Palette) -> Result<Element> {
    let (w, h) = (84.0, 22.0);
    let x = size - MARGIN - w;
    let y = size - MARGIN - h + 4.0;
    Ok(Element::new("g")
        .attr("class", "genesis-badge")
        .child(
            Element::new("rect")
                .num("x", x)?
                .num("y", y)?
                .num("width", w)?
                .num("height", h)?
                .attr("rx", "6")
                .attr("fill", "none")
                .attr("stroke", palette.glow.css()),
        )
        .child(
            Element::new("text")
                .num("x", x + w / 2.0)?
                .num("y", y + 15.0)?
                .attr("text-anchor", "middle")
                .attr("font-family", FONT)
                .attr("font-size", "11")
                .attr("fill", palette.glow.css())
                .text("GENESIS+"),
        ))
}

/// Four stage dots plus a bar for progress inside the current stage
fn progress_indicator(size: f64, progress: &StageProgress, palette: &Palette) -> Result<Element> {
    let c = size / 2.0;
    let dots_y = size - 40.0;
    let bar_width = 60.0;
    let mut group = Element::new("g").attr("class", "stage-progress");

    for (k, stage) in EvolutionStage::ALL.iter().enumerate() {
        let dot = Element::new("circle")
            .num("cx", c - 27.0 + k as f64 * 18.0)?
            .num("cy", dots_y)?
            .attr("r", "4")
            .attr("stroke", palette.accent.css());
        let dot = if *stage <= progress.stage {
            dot.attr("fill", palette.accent.css())
        } else {
            dot.attr("fill", "none")
        };
        group = group.child(dot);
    }

    group = group
        .child(
            Element::new("rect")
                .num("x", c - bar_width / 2.0)?
                .num("y", dots_y + 10.0)?
                .num("width", bar_width)?
                .attr("height", "3")
                .attr("fill", palette.secondary.css())
                .attr("fill-opacity", "0.3"),
        )
        .child(
            Element::new("rect")
                .num("x", c - bar_width / 2.0)?
                .num("y", dots_y + 10.0)?
                .num("width", bar_width * progress.fraction.clamp(0.0, 1.0))?
                .attr("height", "3")
                .attr("fill", palette.accent.css()),
        );
    Ok(group)
}

/// Outline of the core at reduced scale, drawn in the accent color
fn echo(core: &CoreShape, center: &Point, palette: &Palette) -> Result<Element> {
    let mut group = Element::new("g")
        .attr("class", "core-echo")
        .attr("fill", "none")
        .attr("stroke", palette.accent.css())
        .attr("stroke-width", "1.5");
    for primitive in shape_primitives(core.geometry, center, core.radius * 0.55) {
        group = group.child(primitive.to_element()?);
    }
    Ok(group)
}

fn aura(center: &Point, stage: EvolutionStage, palette: &Palette) -> Result<Element> {
    let ring = Primitive::Circle {
        center: *center,
        radius: end_radius(stage) + 8.0,
    };
    Ok(ring
        .to_element()?
        .attr("class", "aura")
        .attr("fill", "none")
        .attr("stroke", palette.glow.css())
        .attr("stroke-opacity", "0.35")
        .attr("stroke-dasharray", "4 6"))
}
