use serde::{Deserialize, Serialize};

/// Locales shipped with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Ja,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ja, Locale::Zh];

    /// Language tag, for logging.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
        }
    }

    /// The locale's own name, shown in the language menu.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "日本語",
            Locale::Zh => "中文",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => EN,
            Locale::Ja => JA,
            Locale::Zh => ZH,
        }
    }
}

/// Look up a UI string by key. Keys absent from a locale's table yield
/// `None`; callers render those as empty labels rather than reporting an
/// error.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    locale
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Convenience for UI code: a missing key becomes an empty label.
pub fn label(locale: Locale, key: &str) -> &'static str {
    lookup(locale, key).unwrap_or("")
}

const EN: &[(&str, &str)] = &[
    ("shapes", "Shapes"),
    ("rectangle", "Rectangle"),
    ("circle", "Circle"),
    ("triangle", "Triangle"),
    ("fillColor", "Fill color"),
    ("options", "Options"),
    ("brush", "Brush"),
    ("eraser", "Eraser"),
    ("colors", "Colors"),
    ("clear", "Clear Canvas"),
    ("save", "Save As Image"),
];

const JA: &[(&str, &str)] = &[
    ("shapes", "図形"),
    ("rectangle", "四角形"),
    ("circle", "円"),
    ("triangle", "三角形"),
    ("fillColor", "塗りつぶし"),
    ("options", "オプション"),
    ("brush", "ブラシ"),
    ("eraser", "消しゴム"),
    ("colors", "色"),
    ("clear", "キャンバスをクリア"),
    ("save", "画像として保存"),
];

const ZH: &[(&str, &str)] = &[
    ("shapes", "图形"),
    ("rectangle", "矩形"),
    ("circle", "圆形"),
    ("triangle", "三角形"),
    ("fillColor", "填充颜色"),
    ("options", "选项"),
    ("brush", "画笔"),
    ("eraser", "橡皮擦"),
    ("colors", "颜色"),
    ("clear", "清除画布"),
    ("save", "保存为图片"),
];

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 11] = [
        "shapes",
        "rectangle",
        "circle",
        "triangle",
        "fillColor",
        "options",
        "brush",
        "eraser",
        "colors",
        "clear",
        "save",
    ];

    #[test]
    fn every_locale_covers_every_key() {
        for locale in Locale::ALL {
            for key in KEYS {
                assert!(
                    lookup(locale, key).is_some(),
                    "{key} missing for {}",
                    locale.tag()
                );
            }
        }
    }

    #[test]
    fn switching_back_restores_the_original_strings() {
        let before: Vec<&str> = KEYS.iter().map(|k| label(Locale::En, k)).collect();
        let japanese: Vec<&str> = KEYS.iter().map(|k| label(Locale::Ja, k)).collect();
        assert_ne!(before, japanese);
        let after: Vec<&str> = KEYS.iter().map(|k| label(Locale::En, k)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_keys_fail_silently() {
        assert_eq!(lookup(Locale::En, "undo"), None);
        assert_eq!(label(Locale::Zh, "undo"), "");
    }
}
