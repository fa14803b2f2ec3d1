use indexmap::IndexMap;
use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("build")
}

pub(crate) fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn default_entry() -> String {
    "./src/main.js".to_string()
}

pub(crate) fn default_aliases() -> IndexMap<String, PathBuf> {
    IndexMap::from([
        ("<PROJECT_ROOT>".to_string(), PathBuf::from(".")),
        ("assets".to_string(), PathBuf::from("assets")),
        ("fonts".to_string(), PathBuf::from("docs/assets/fonts")),
        ("shared".to_string(), PathBuf::from("shared")),
    ])
}

pub(crate) fn default_hot_client() -> String {
    "webpack-hot-middleware/client".to_string()
}

pub(crate) fn default_inline_limit() -> u64 {
    8 * 1024
}

pub(crate) fn default_html_template() -> PathBuf {
    PathBuf::from("./src/index.html")
}

pub(crate) fn default_html_base() -> String {
    "/".to_string()
}

pub(crate) fn default_license_file() -> PathBuf {
    PathBuf::from("LICENSE")
}

pub(crate) fn default_license_output() -> String {
    "licenses.txt".to_string()
}

/// Deserialize an optional string that may arrive as any scalar.
///
/// Environment layers type their values, so `NODE_ENV=1` or a version of `2`
/// reach serde as numbers.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_option(ScalarString)
}

struct ScalarString;

impl<'de> serde::de::Visitor<'de> for ScalarString {
    type Value = Option<String>;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }
}
