//! Embedded assets for Policy Sim
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

/// Icons bundled with the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyIcon {
    BookOpen,
    Scale,
    ShieldCheck,
    TrendingUp,
    Users,
    Zap,
    FileText,
    X,
    Languages,
}

impl PolicyIcon {
    pub const ALL: [PolicyIcon; 9] = [
        PolicyIcon::BookOpen,
        PolicyIcon::Scale,
        PolicyIcon::ShieldCheck,
        PolicyIcon::TrendingUp,
        PolicyIcon::Users,
        PolicyIcon::Zap,
        PolicyIcon::FileText,
        PolicyIcon::X,
        PolicyIcon::Languages,
    ];

    /// Look up an icon by its PascalCase name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            PolicyIcon::BookOpen => "BookOpen",
            PolicyIcon::Scale => "Scale",
            PolicyIcon::ShieldCheck => "ShieldCheck",
            PolicyIcon::TrendingUp => "TrendingUp",
            PolicyIcon::Users => "Users",
            PolicyIcon::Zap => "Zap",
            PolicyIcon::FileText => "FileText",
            PolicyIcon::X => "X",
            PolicyIcon::Languages => "Languages",
        }
    }

    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            PolicyIcon::BookOpen => "icons/book-open.svg",
            PolicyIcon::Scale => "icons/scale.svg",
            PolicyIcon::ShieldCheck => "icons/shield-check.svg",
            PolicyIcon::TrendingUp => "icons/trending-up.svg",
            PolicyIcon::Users => "icons/users.svg",
            PolicyIcon::Zap => "icons/zap.svg",
            PolicyIcon::FileText => "icons/file-text.svg",
            PolicyIcon::X => "icons/x.svg",
            PolicyIcon::Languages => "icons/languages.svg",
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::PolicyDimension;
    use crate::domain::simulation::Metric;

    #[test]
    fn every_icon_is_embedded() {
        for icon in PolicyIcon::ALL {
            let path = icon.path();
            assert!(Assets::get(&path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn lookup_by_name() {
        for icon in PolicyIcon::ALL {
            assert_eq!(PolicyIcon::from_name(icon.name()), Some(icon));
        }
        assert_eq!(PolicyIcon::from_name("NotAnIcon"), None);
        assert_eq!(PolicyIcon::from_name("bookopen"), None);
    }

    #[test]
    fn domain_icon_names_resolve() {
        for dim in PolicyDimension::ALL {
            assert!(PolicyIcon::from_name(dim.icon_name()).is_some(), "{dim}");
        }
        for metric in Metric::ALL {
            assert!(PolicyIcon::from_name(metric.icon_name()).is_some(), "{metric:?}");
        }
    }

    #[test]
    fn load_rejects_unknown_path() {
        assert!(Assets.load("icons/missing.svg").is_err());
        assert!(matches!(Assets.load(""), Ok(None)));
    }
}
