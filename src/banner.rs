use std::collections::BTreeSet;

/// Visual variant of a banner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BannerVariant {
    Info,
    InfoNeutral,
    Error,
    Warning,
    Success,
}

/// Colour set used to render a banner of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerStyle {
    pub border: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

impl BannerVariant {
    pub const ALL: [Self; 5] = [
        Self::Info,
        Self::InfoNeutral,
        Self::Error,
        Self::Warning,
        Self::Success,
    ];

    /// Total mapping from variant to its colour set.
    pub const fn style(self) -> BannerStyle {
        match self {
            Self::Info => BannerStyle {
                border: "#bfdbfe",
                background: "#eff6ff",
                text: "#1e3a8a",
                icon: "#1a73eb",
            },
            Self::InfoNeutral => BannerStyle {
                border: "#e5e7eb",
                background: "#f9fafb",
                text: "#111827",
                icon: "#1a73eb",
            },
            Self::Error => BannerStyle {
                border: "#fecaca",
                background: "#fef2f2",
                text: "#7f1d1d",
                icon: "#c70000",
            },
            Self::Warning => BannerStyle {
                border: "#fde68a",
                background: "#fffbeb",
                text: "#78350f",
                icon: "#a3600e",
            },
            Self::Success => BannerStyle {
                border: "#bbf7d0",
                background: "#f0fdf4",
                text: "#14532d",
                icon: "#007700",
            },
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::InfoNeutral => "info-neutral",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }

    /// Icon glyph name shown next to the banner body.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Info | Self::InfoNeutral => "circle-info",
            Self::Error => "circle-exclamation",
            Self::Warning => "triangle-exclamation",
            Self::Success => "circle-check",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLayout {
    Inline,
    #[default]
    Block,
}

/// A dismissible notice with optional heading and actions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Banner {
    pub id: String,
    #[serde(default = "default_variant")]
    pub variant: BannerVariant,
    #[serde(default)]
    pub layout: BannerLayout,
    #[serde(default)]
    pub heading: Option<String>,
    pub body: String,
    #[serde(default)]
    pub primary_action: Option<String>,
    #[serde(default)]
    pub secondary_action: Option<String>,
    #[serde(default = "default_dismissible")]
    pub dismissible: bool,
}

const fn default_variant() -> BannerVariant {
    BannerVariant::Info
}

const fn default_dismissible() -> bool {
    true
}

impl Banner {
    pub fn new(id: impl Into<String>, variant: BannerVariant, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            variant,
            layout: BannerLayout::default(),
            heading: None,
            body: body.into(),
            primary_action: None,
            secondary_action: None,
            dismissible: true,
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }
}

/// Which banners the user has dismissed.
///
/// Dismissal is session-local; `reset` brings everything back.
#[derive(Debug, Default, Clone)]
pub struct BannerBoard {
    dismissed: BTreeSet<String>,
}

impl BannerBoard {
    pub fn dismiss(&mut self, id: impl Into<String>) {
        let id = id.into();

        log::debug!("banner dismissed: {id}");
        self.dismissed.insert(id);
    }

    pub fn reset(&mut self) {
        self.dismissed.clear();
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        self.dismissed.contains(id)
    }

    /// The banners still shown, in their original order.
    pub fn visible<'a>(&'a self, banners: &'a [Banner]) -> impl Iterator<Item = &'a Banner> {
        banners
            .iter()
            .filter(move |banner| !self.is_dismissed(&banner.id))
    }
}

/// Stock banners shown on the showcase surface when none are configured.
pub fn stock_banners() -> Vec<Banner> {
    vec![
        Banner::new(
            "welcome",
            BannerVariant::Info,
            "Manage your schedule and book meetings with your team.",
        )
        .with_heading("Welcome"),
        Banner::new(
            "sync-warning",
            BannerVariant::Warning,
            "Calendar data is the built-in demo set; configure an event source to replace it.",
        ),
    ]
}
