use super::model::{CardFrame, Pose, Stage};
use super::{
    CARD_RADIUS, GLYPH_FONT_SIZE, GLYPH_PADDING, LABEL_FONT_SIZE, LABEL_PADDING_X,
    LABEL_PADDING_Y, LABEL_RADIUS, LABEL_TOP, SHADOW_OFFSET, SHADOW_SPREAD,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use carousel::{CardStyle, DirectionGlyph};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;
use std::time::Instant;

struct CardRenderer<'a> {
    frame: CardFrame,
    pose: Pose,
    style: CardStyle,
    image: Option<&'a Pixbuf>,
    alt: String,
}

impl CardRenderer<'_> {
    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (w, h) = (self.frame.width, self.frame.height);

        cr.save()?;
        cr.translate(
            self.frame.center_x + self.pose.translate_fraction * w,
            self.frame.center_y,
        );
        cr.scale(self.pose.scale, self.pose.scale);
        cr.translate(-w / 2.0, -h / 2.0);

        // paint the whole card into a group so opacity applies once
        cr.push_group();
        self.draw_shadow(cr, colors)?;
        self.draw_body(cr, colors)?;
        if self.style.has_label() {
            self.draw_label(cr, colors)?;
        }
        if let Some(glyph) = self.style.glyph {
            self.draw_glyph(cr, colors, glyph)?;
        }
        cr.pop_group_to_source()?;
        cr.paint_with_alpha(self.pose.opacity)?;

        cr.restore()
    }

    fn draw_shadow(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (r, g, b, a) = colors.shadow.into_components();
        // cheap blur: a few widening translucent outlines
        for step in 1..=3 {
            let grow = SHADOW_SPREAD * step as f64 / 3.0;
            cr.set_source_rgba(r, g, b, a / step as f64);
            rounded_rect(
                cr,
                -grow / 2.0,
                SHADOW_OFFSET - grow / 2.0,
                self.frame.width + grow,
                self.frame.height + grow,
                CARD_RADIUS + grow / 2.0,
            );
            cr.fill()?;
        }
        Ok(())
    }

    fn draw_body(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (w, h) = (self.frame.width, self.frame.height);

        cr.save()?;
        rounded_rect(cr, 0.0, 0.0, w, h, CARD_RADIUS);
        cr.clip();

        match self.image {
            Some(pixbuf) => {
                // object-fit: cover
                let (iw, ih) = (pixbuf.width() as f64, pixbuf.height() as f64);
                let scale = (w / iw).max(h / ih);
                cr.translate((w - iw * scale) / 2.0, (h - ih * scale) / 2.0);
                cr.scale(scale, scale);
                cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
                cr.paint()?;
            }
            None => {
                set_color(cr, colors.placeholder);
                cr.paint()?;
                set_color(cr, colors.label_fg);
                cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
                cr.set_font_size(LABEL_FONT_SIZE * 2.0);
                show_centered(cr, &self.alt, w / 2.0, h / 2.0)?;
            }
        }

        cr.restore()
    }

    fn draw_label(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(LABEL_FONT_SIZE);
        let ext = cr.text_extents(self.style.label)?;

        let (pill_w, pill_h) = (
            ext.width() + 2.0 * LABEL_PADDING_X,
            ext.height() + 2.0 * LABEL_PADDING_Y,
        );
        let pill_x = (self.frame.width - pill_w) / 2.0;

        set_color(cr, colors.label_bg);
        rounded_rect(cr, pill_x, LABEL_TOP, pill_w, pill_h, LABEL_RADIUS);
        cr.fill()?;

        set_color(cr, colors.label_fg);
        show_centered(
            cr,
            self.style.label,
            self.frame.width / 2.0,
            LABEL_TOP + pill_h / 2.0,
        )
    }

    /// Forward arrow sits on the left edge of the next card, backward arrow on
    /// the right edge of the previous one.
    fn draw_glyph(
        &self,
        cr: &Context,
        colors: &ThemeColors,
        glyph: DirectionGlyph,
    ) -> Result<(), cairo::Error> {
        let radius = GLYPH_PADDING + GLYPH_FONT_SIZE / 2.0;
        let cx = match glyph {
            DirectionGlyph::Forward => radius,
            DirectionGlyph::Backward => self.frame.width - radius,
        };
        let cy = self.frame.height / 2.0;

        set_color(cr, colors.label_bg);
        cr.new_sub_path();
        cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        cr.fill()?;

        set_color(cr, colors.label_fg);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(GLYPH_FONT_SIZE);
        show_centered(cr, glyph.as_ref(), cx, cy)
    }
}

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn show_centered(cr: &Context, text: &str, cx: f64, cy: f64) -> Result<(), cairo::Error> {
    let ext = cr.text_extents(text)?;
    cr.move_to(
        cx - ext.width() / 2.0 - ext.x_bearing(),
        cy - ext.height() / 2.0 - ext.y_bearing(),
    );
    cr.show_text(text)
}

fn rounded_rect(cr: &Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0);
    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

/// Paints every visible card, lowest layer first.
pub fn draw(
    cr: &Context,
    stage: &Stage,
    colors: &ThemeColors,
    width: f64,
    height: f64,
    now: Instant,
) -> Result<(), cairo::Error> {
    let frame = CardFrame::layout(width, height);
    let poses = stage.poses(now);

    let mut cards: Vec<_> = stage
        .carousel
        .descriptors()
        .zip(poses)
        .filter(|(_, pose)| pose.opacity > 0.0)
        .collect();
    cards.sort_by_key(|(d, _)| d.style.layer);

    for (descriptor, pose) in cards {
        let alt = stage
            .carousel
            .deck()
            .get(descriptor.index)
            .map(|card| card.alt_text())
            .unwrap_or_default();

        CardRenderer {
            frame,
            pose,
            style: descriptor.style,
            image: stage.image(descriptor.index),
            alt,
        }
        .draw(cr, colors)?;
    }
    Ok(())
}
