use crate::models::MediaRef;

/// origin serving the letter images and audio uploaded through the admin site
pub const MEDIA_ORIGIN: &str = "https://media.letra.tl";

/// resolves the image key to a fetchable URL. an absent key means the view
/// shows the fallback glyph instead; resolution never blocks a round
pub fn image_url(media: &MediaRef) -> Option<String> {
    media.image_key.as_deref().map(resolve)
}

pub fn audio_url(media: &MediaRef) -> String {
    resolve(&media.audio_ref)
}

fn resolve(key: &str) -> String {
    // keys that are already absolute pass through verbatim
    if key.starts_with("http://") || key.starts_with("https://") {
        return key.to_string();
    }
    format!("{}/{}", MEDIA_ORIGIN, key.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(image_key: Option<&str>) -> MediaRef {
        MediaRef {
            image_key: image_key.map(str::to_string),
            fallback_glyph: "A".to_string(),
            audio_ref: "audio/tetun/a.mp3".to_string(),
        }
    }

    #[test]
    fn bare_keys_get_the_media_origin() {
        let url = image_url(&media(Some("letters/tetun/ahi.jpg"))).unwrap();
        assert_eq!(url, "https://media.letra.tl/letters/tetun/ahi.jpg");
    }

    #[test]
    fn leading_slash_does_not_double_up() {
        let url = image_url(&media(Some("/letters/tetun/ahi.jpg"))).unwrap();
        assert_eq!(url, "https://media.letra.tl/letters/tetun/ahi.jpg");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = image_url(&media(Some("https://cdn.example.org/ahi.jpg"))).unwrap();
        assert_eq!(url, "https://cdn.example.org/ahi.jpg");
    }

    #[test]
    fn missing_key_resolves_to_none() {
        assert!(image_url(&media(None)).is_none());
    }

    #[test]
    fn audio_refs_resolve_like_image_keys() {
        assert_eq!(
            audio_url(&media(None)),
            "https://media.letra.tl/audio/tetun/a.mp3"
        );
    }
}
