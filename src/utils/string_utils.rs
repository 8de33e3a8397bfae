//! # 문자열 유틸리티
//!
//! 슬러그 생성과 입력 문자열 정리에 사용하는 공통 함수들입니다.

use serde::Deserialize;

/// URL 에 사용할 슬러그를 생성합니다.
///
/// 결과는 항상 ASCII `[a-z0-9-]` 로만 구성됩니다.
///
/// - ASCII 가 아닌 문자는 `deunicode` 로 음역합니다 (`é` → `e`, `Ł` → `l`, `М` → `m`).
/// - `&` 는 `and` 로 바꿉니다.
/// - 공백, `-`, `_` 가 연속되면 하나의 `-` 가 됩니다.
/// - 그 밖의 문장부호와 기호는 제거합니다.
/// - 앞뒤의 `-` 는 남기지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(slugify("The Forest Hiker"), "the-forest-hiker");
/// assert_eq!(slugify("  Sea & Sun: Café Tour! "), "sea-and-sun-cafe-tour");
/// assert_eq!(slugify("Łódź Tour"), "lodz-tour");
/// ```
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for ch in value.chars() {
        let mut buf = [0u8; 4];
        let piece: &str = match ch {
            '&' => "and",
            c if c.is_ascii() => c.encode_utf8(&mut buf),
            c => deunicode::deunicode_char(c).unwrap_or(""),
        };

        for c in piece.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_separator && !slug.is_empty() {
                    slug.push('-');
                }
                pending_separator = false;
                slug.push(c.to_ascii_lowercase());
            } else if c.is_whitespace() || c == '-' || c == '_' {
                pending_separator = true;
            }
        }
    }

    slug
}

/// 선택적 문자열 필드 정리
///
/// 빈 문자열/공백만 있는 경우 `None`, 그 외에는 trim 된 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]` 로 사용합니다.
/// `null`, 빈 문자열, 공백 문자열은 모두 `None` 이 됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("The Forest Hiker"), "the-forest-hiker");
        assert_eq!(slugify("the-forest-hiker"), "the-forest-hiker");
        assert_eq!(slugify("Snow   Adventurer"), "snow-adventurer");
    }

    #[test]
    fn test_slugify_strips_punctuation_and_edges() {
        assert_eq!(slugify("  Sea & Sun: Café Tour! "), "sea-and-sun-cafe-tour");
        assert_eq!(slugify("--The (Wine) Taster--"), "the-wine-taster");
        assert_eq!(slugify("Northern_Lights 2024"), "northern-lights-2024");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let names = ["The Park Camper", "Über Straße", "A  -  B"];
        for name in names {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
        assert_eq!(slugify("Über Straße"), "uber-strasse");
    }

    #[test]
    fn test_slugify_transliterates_outside_latin1() {
        assert_eq!(slugify("Łódź Tour"), "lodz-tour");
        assert_eq!(slugify("Москва"), "moskva");

        let korean = slugify("서울 투어");
        assert!(!korean.is_empty());
        assert!(!korean.starts_with('-') && !korean.ends_with('-'));
        assert!(
            korean
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            photo: Option<String>,
        }

        let probe: Probe = serde_json::from_str(r#"{"photo":"  me.jpg "}"#).unwrap();
        assert_eq!(probe.photo.as_deref(), Some("me.jpg"));

        let probe: Probe = serde_json::from_str(r#"{"photo":"   "}"#).unwrap();
        assert_eq!(probe.photo, None);

        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.photo, None);
    }
}
