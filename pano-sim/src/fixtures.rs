//! Deterministic gallery fixtures.

use anyhow::Context;
use pano_core::model::{Gallery, GalleryId};
use url::Url;

pub const IMAGE_HOST: &str = "https://photos.example.invalid";

/// `galleries` galleries of `images` images each, with stable IDs so runs
/// are reproducible.
pub fn galleries(galleries: usize, images: usize) -> anyhow::Result<Vec<Gallery>> {
    (0..galleries)
        .map(|g| {
            let urls = (0..images)
                .map(|i| image_url(g, i))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(Gallery::new(
                GalleryId::from_u128(g as u128 + 1),
                format!("Gallery {}", g + 1),
                urls,
            ))
        })
        .collect()
}

fn image_url(gallery: usize, image: usize) -> anyhow::Result<Url> {
    let raw = format!("{IMAGE_HOST}/g{gallery}/{image}.jpg");
    Url::parse(&raw).with_context(|| format!("invalid fixture url {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_requested_shape() {
        let list = galleries(3, 2).expect("fixtures");
        assert_eq!(list.len(), 3);
        assert!(list.iter().all(|g| g.images.len() == 2));
        assert_eq!(list[2].name, "Gallery 3");
        assert_eq!(
            list[1].images[1].as_str(),
            "https://photos.example.invalid/g1/1.jpg"
        );
    }
}
