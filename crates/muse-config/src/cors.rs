use std::time::Duration;

use serde::Deserialize;

/// CORS configuration for the browser front-end
///
/// Methods and request headers are fixed by the relay surface (JSON POSTs
/// plus the health GET); only the origin policy is configurable.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AnyOrList,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Either a wildcard "*" or an explicit list of values
#[derive(Debug, Clone, Default)]
pub enum AnyOrList {
    /// Match any value
    #[default]
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for AnyOrList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de;

        struct AnyOrListVisitor;

        impl<'de> de::Visitor<'de> for AnyOrListVisitor {
            type Value = AnyOrList;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("\"*\" or array of strings")
            }

            fn visit_str<E>(self, v: &str) -> Result<AnyOrList, E>
            where
                E: de::Error,
            {
                if v == "*" {
                    Ok(AnyOrList::Any)
                } else {
                    Ok(AnyOrList::List(vec![v.to_string()]))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<AnyOrList, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut values = Vec::new();
                while let Some(value) = seq.next_element::<String>()? {
                    if value == "*" {
                        return Ok(AnyOrList::Any);
                    }
                    values.push(value);
                }
                Ok(AnyOrList::List(values))
            }
        }

        deserializer.deserialize_any(AnyOrListVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        cors: CorsConfig,
    }

    #[test]
    fn wildcard_origin() {
        let parsed: Wrapper = toml::from_str("[cors]\norigins = \"*\"").expect("valid config");
        assert!(matches!(parsed.cors.origins, AnyOrList::Any));
    }

    #[test]
    fn explicit_origin_list() {
        let parsed: Wrapper =
            toml::from_str("[cors]\norigins = [\"https://app.example.com\"]").expect("valid config");
        match parsed.cors.origins {
            AnyOrList::List(origins) => assert_eq!(origins, vec!["https://app.example.com"]),
            AnyOrList::Any => panic!("expected explicit list"),
        }
    }

    #[test]
    fn wildcard_inside_list_collapses_to_any() {
        let parsed: Wrapper =
            toml::from_str("[cors]\norigins = [\"https://a.example\", \"*\"]").expect("valid config");
        assert!(matches!(parsed.cors.origins, AnyOrList::Any));
    }
}
