//! Assembles the multi-part outfit prompt.
//!
//! Part order matters: one inline image per garment, then the base
//! person photo, then the Spanish instruction text. The instruction tells
//! the model to treat the last image as the person to dress.

use std::sync::Arc;

use tracing::warn;

use wardrobe_core::{ClothingItem, ContentPart};

use crate::fetch::{encode_image_url, ImageFetcher};

/// Builds `generateContent` part lists for outfit rendering.
pub struct PromptBuilder {
    fetcher: Arc<dyn ImageFetcher>,
}

impl PromptBuilder {
    /// Create a builder over the given image fetcher.
    pub fn new(fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Build the ordered prompt parts for rendering `items` on the person
    /// in `base_image_url`.
    ///
    /// Image failures never abort the build: a garment photo that cannot
    /// be encoded is skipped with a warning, and a failing base photo
    /// leaves the prompt without a reference person. The text instruction
    /// always describes the full selection, encoded or not.
    pub async fn outfit_parts(
        &self,
        base_image_url: &str,
        items: &[ClothingItem],
    ) -> Vec<ContentPart> {
        let mut parts = Vec::with_capacity(items.len() + 2);

        for item in items {
            match encode_image_url(self.fetcher.as_ref(), &item.image_url).await {
                Ok(encoded) => parts.push(ContentPart::inline_image(encoded.mime_type, encoded.data)),
                Err(e) => warn!("skipping garment image for '{}': {e}", item.name),
            }
        }

        match encode_image_url(self.fetcher.as_ref(), base_image_url).await {
            Ok(encoded) => parts.push(ContentPart::inline_image(encoded.mime_type, encoded.data)),
            Err(e) => warn!("proceeding without base image: {e}"),
        }

        parts.push(ContentPart::text(outfit_instruction(items)));
        parts
    }
}

/// The Spanish generation instruction, listing every selected garment.
fn outfit_instruction(items: &[ClothingItem]) -> String {
    let descriptions: Vec<String> = items.iter().map(ClothingItem::prompt_description).collect();
    format!(
        "Genera una imagen de la misma persona que aparece en la última imagen \
(conservando exactamente sus características físicas: rostro, complexión, altura, \
color de piel, cabello, etc.), pero ahora vistiendo las siguientes prendas: {}.\n\
Instrucciones específicas:\n\
- Mantén EXACTAMENTE la misma persona de la imagen de referencia\n\
- Conserva sus rasgos faciales, complexión corporal y características físicas\n\
- Solo cambia la ropa por las prendas especificadas\n\
- Estilo: fotografía realista, profesional\n\
- Iluminación: natural, bien distribuida\n\
- Encuadre: cuerpo completo\n\
- Fondo: neutro y limpio\n\
- Pose: natural y relajada\n\n\
Las prendas deben verse bien ajustadas y naturales en la persona.",
        descriptions.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::FakeFetcher;
    use wardrobe_core::ClothingType;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn item(name: &str, url: &str) -> ClothingItem {
        let mut item = ClothingItem::new(name, name, ClothingType::Shirt, "azul", url);
        item.brand = Some("Zara".to_string());
        item
    }

    #[tokio::test]
    async fn test_parts_order_garments_then_base_then_text() {
        let fetcher = FakeFetcher::new()
            .with_image("https://example.com/shirt.png", PNG_HEADER.to_vec())
            .with_image("https://example.com/pants.png", PNG_HEADER.to_vec())
            .with_image("https://example.com/me.png", PNG_HEADER.to_vec());
        let builder = PromptBuilder::new(Arc::new(fetcher));

        let parts = builder
            .outfit_parts(
                "https://example.com/me.png",
                &[
                    item("Camisa", "https://example.com/shirt.png"),
                    item("Pantalón", "https://example.com/pants.png"),
                ],
            )
            .await;

        assert_eq!(parts.len(), 4);
        assert!(matches!(parts[0], ContentPart::InlineImage { .. }));
        assert!(matches!(parts[1], ContentPart::InlineImage { .. }));
        assert!(matches!(parts[2], ContentPart::InlineImage { .. }));
        assert!(matches!(parts[3], ContentPart::Text(_)));
    }

    #[tokio::test]
    async fn test_failed_garment_image_is_skipped() {
        let fetcher =
            FakeFetcher::new().with_image("https://example.com/me.png", PNG_HEADER.to_vec());
        let builder = PromptBuilder::new(Arc::new(fetcher));

        let parts = builder
            .outfit_parts(
                "https://example.com/me.png",
                &[item("Camisa", "https://example.com/gone.png")],
            )
            .await;

        // Base image and text survive; the instruction still names the item.
        assert_eq!(parts.len(), 2);
        let ContentPart::Text(text) = &parts[1] else {
            panic!("last part must be text");
        };
        assert!(text.contains("Camisa"));
    }

    #[tokio::test]
    async fn test_failed_base_image_still_yields_text() {
        let builder = PromptBuilder::new(Arc::new(FakeFetcher::new()));
        let parts = builder.outfit_parts("https://example.com/gone.png", &[]).await;
        assert_eq!(parts.len(), 1);
        assert!(matches!(parts[0], ContentPart::Text(_)));
    }

    #[test]
    fn test_instruction_lists_garment_descriptions() {
        let text = outfit_instruction(&[
            item("Camisa Azul", "https://example.com/a.png"),
            item("Pantalón", "https://example.com/b.png"),
        ]);
        assert!(text.contains("Camisa Azul (shirt) de color azul marca Zara"));
        assert!(text.contains("la última imagen"));
        assert!(text.contains("cuerpo completo"));
    }
}
