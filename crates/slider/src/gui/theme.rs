use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub label_bg: Srgba<f64>,
    pub label_fg: Srgba<f64>,
    pub shadow: Srgba<f64>,
    pub placeholder: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            label_bg: Self::lookup_color(
                context,
                "slider_label_bg",
                Srgba::new(0.0, 0.0, 0.0, 0.7),
                None,
            ),
            label_fg: Self::lookup_color(
                context,
                "slider_label_fg",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
            shadow: Self::lookup_color(
                context,
                "slider_shadow",
                Srgba::new(0.0, 0.0, 0.0, 0.1),
                None,
            ),
            placeholder: Self::lookup_color(
                context,
                "theme_unfocused_bg_color",
                Srgba::new(0.6, 0.6, 0.6, 1.0),
                Some(1.0),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color slider_label_bg rgba(0, 0, 0, 0.7);
@define-color slider_label_fg #ffffff;
@define-color slider_shadow rgba(0, 0, 0, 0.1);

.slider-title {
    font-size: 2em;
    font-weight: 500;
}

.slider-stage {
    background: none;
}

.dot {
    min-width: 12px;
    min-height: 12px;
    padding: 0;
    border: none;
    border-radius: 50%;
    box-shadow: none;
    background-image: none;
    background-color: #cccccc;
    transition: background-color 300ms ease;
}

.dot.active {
    background-color: #007bff;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
