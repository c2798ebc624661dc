//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Map a locale code such as "zh-CN" or "en_US" to a supported locale
    pub fn from_code(code: &str) -> Self {
        if code.trim().to_ascii_lowercase().starts_with("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("AI Policy Impact Simulator", "AI 政策影响模拟器"));
    map.insert(
        "app-subtitle",
        (
            "Test policy packages and visualize their potential economic and environmental trade-offs.",
            "测试政策组合，直观呈现其潜在的经济与环境权衡。",
        ),
    );

    // Panels
    map.insert("panel-controls", ("Policy Control Panel", "政策控制面板"));
    map.insert("panel-outcomes", ("Simulated Outcomes", "模拟结果"));

    // Dimensions
    map.insert("dim-education", ("Education & Reskilling", "教育与再培训"));
    map.insert("dim-antitrust", ("Antitrust & Competition", "反垄断与竞争"));
    map.insert("dim-ethics", ("Ethical & Green Guidelines", "伦理与绿色准则"));
    map.insert("dim-education-short", ("Edu", "教育"));
    map.insert("dim-antitrust-short", ("Anti", "反垄断"));
    map.insert("dim-ethics-short", ("Eth", "伦理"));

    // Levels
    map.insert("level-weak", ("Weak", "弱"));
    map.insert("level-moderate", ("Moderate", "中"));
    map.insert("level-strong", ("Strong", "强"));

    // Education options
    map.insert("edu-weak-label", ("Minimal Intervention", "最低限度干预"));
    map.insert("edu-weak-desc", ("Limited public funding for reskilling programs.", "再培训项目的公共资金有限。"));
    map.insert("edu-mod-label", ("Moderate Reform", "温和改革"));
    map.insert("edu-mod-desc", ("Public-private partnerships for targeted training.", "以公私合作开展定向培训。"));
    map.insert("edu-strong-label", ("Aggressive Reskilling Initiative", "大力再培训计划"));
    map.insert("edu-strong-desc", ("Large-scale, federally-funded programs.", "大规模的联邦资助项目。"));

    // Antitrust options
    map.insert("anti-weak-label", ("Laissez-faire", "自由放任"));
    map.insert("anti-weak-desc", ("Allow markets to self-regulate.", "允许市场自我调节。"));
    map.insert("anti-mod-label", ("Targeted Oversight", "定向监管"));
    map.insert("anti-mod-desc", ("Regulate specific anti-competitive behaviors.", "监管特定的反竞争行为。"));
    map.insert("anti-strong-label", ("Aggressive Anti-Monopoly", "强力反垄断"));
    map.insert("anti-strong-desc", ("Proactively break up monopolies.", "主动拆分垄断企业。"));

    // Ethics options
    map.insert("eth-weak-label", ("Industry Self-Regulation", "行业自律"));
    map.insert("eth-weak-desc", ("Companies develop voluntary codes.", "企业制定自愿性准则。"));
    map.insert("eth-mod-label", ("Standardized Guidelines", "标准化准则"));
    map.insert("eth-mod-desc", ("Government sets standards for fairness.", "政府制定公平性标准。"));
    map.insert("eth-strong-label", ("Comprehensive Regulation", "全面监管"));
    map.insert("eth-strong-desc", ("Mandatory audits and green mandates.", "强制审计与绿色指令。"));

    // Metrics
    map.insert("metric-gdp", ("GDP Growth", "GDP 增长"));
    map.insert("metric-inequality", ("Inequality", "不平等"));
    map.insert("metric-inequality-index", ("Inequality Index", "不平等指数"));
    map.insert("metric-energy", ("GHG Growth", "温室气体增长"));

    // Chart legend
    map.insert("chart-simulated", ("Simulated Result", "模拟结果"));
    map.insert("chart-baseline", ("Baseline", "基线"));

    // Actions
    map.insert("action-run", ("Run Simulation", "运行模拟"));
    map.insert("action-whitepaper", ("Generate Whitepaper", "生成白皮书"));

    // Whitepaper modal
    map.insert("whitepaper-title", ("Generated Policy Whitepaper", "政策白皮书"));

    // Log panel
    map.insert("log-title", ("Run History", "运行记录"));
    map.insert("log-clear", ("Clear", "清除"));
    map.insert("log-runs", ("runs", "次运行"));
    map.insert("log-last-run", ("Last run", "最近一次"));
    map.insert("log-empty", ("No simulations run yet.", "尚未运行模拟。"));
    map.insert("activity-whitepaper", ("Whitepaper generated", "已生成白皮书"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::{PolicyDimension, PolicyLevel, PolicyOption};
    use crate::domain::simulation::Metric;

    fn referenced_keys() -> Vec<&'static str> {
        let mut keys = vec![
            "app-title",
            "app-subtitle",
            "panel-controls",
            "panel-outcomes",
            "chart-simulated",
            "chart-baseline",
            "action-run",
            "action-whitepaper",
            "whitepaper-title",
            "log-title",
            "log-clear",
            "log-runs",
            "log-last-run",
            "log-empty",
            "activity-whitepaper",
        ];
        keys.extend(PolicyDimension::ALL.iter().flat_map(|d| [d.title_key(), d.short_key()]));
        keys.extend(PolicyLevel::ALL.iter().map(|l| l.label_key()));
        keys.extend(
            PolicyDimension::ALL
                .into_iter()
                .flat_map(PolicyOption::for_dimension)
                .flat_map(|o| [o.label_key, o.description_key]),
        );
        keys.extend(Metric::ALL.iter().flat_map(|m| [m.label_key(), m.card_label_key()]));
        keys
    }

    #[test]
    fn every_referenced_key_is_translated() {
        for key in referenced_keys() {
            let (en, zh) = translations()
                .get(key)
                .copied()
                .unwrap_or_else(|| panic!("missing translation for {key}"));
            assert!(!en.is_empty() && !zh.is_empty(), "{key}");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::ZhCN, "no-such-key").to_string(), "no-such-key");
    }

    #[test]
    fn translate_by_locale() {
        assert_eq!(t(Locale::EnUS, "action-run").to_string(), "Run Simulation");
        assert_eq!(t(Locale::ZhCN, "action-run").to_string(), "运行模拟");
    }

    #[test]
    fn locale_codes() {
        assert_eq!(Locale::from_code("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_code("ZH_tw"), Locale::ZhCN);
        assert_eq!(Locale::from_code("en-US"), Locale::EnUS);
        assert_eq!(Locale::from_code("fr"), Locale::EnUS);
        assert_eq!(Locale::from_code(""), Locale::EnUS);
    }
}
