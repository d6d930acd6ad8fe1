//! The seed catalogue: the fixed set of example garments shipped with the
//! application.
//!
//! Seed items carry the fixed ids `"1"`..`"16"` and are never written to
//! persisted storage; repositories only manage user-added items. Deleting
//! or updating a seed id through the repository path is therefore a no-op /
//! not-found by design.

use super::clothing::{ClothingItem, ClothingType};

fn seed(
    id: &str,
    name: &str,
    kind: ClothingType,
    color: &str,
    brand: &str,
    image_url: &str,
    description: &str,
) -> ClothingItem {
    ClothingItem {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        color: color.to_string(),
        brand: Some(brand.to_string()),
        image_url: image_url.to_string(),
        description: Some(description.to_string()),
        tags: None,
        price: None,
        source_url: None,
    }
}

/// Build the 16-item seed catalogue.
#[must_use]
pub fn seed_catalog() -> Vec<ClothingItem> {
    vec![
        // Camisas
        seed(
            "1",
            "Camisa Blanca Formal",
            ClothingType::Shirt,
            "blanco",
            "Hugo Boss",
            "https://scabal.com/cdn/shop/files/4400239_I.jpg?v=1716203255&width=1445",
            "Camisa formal de manga larga",
        ),
        seed(
            "2",
            "Camisa Azul Cielo",
            ClothingType::Shirt,
            "azul",
            "Ralph Lauren",
            "https://m.media-amazon.com/images/I/519-6fgzdQL._UY1000_.jpg",
            "Camisa casual de algodón",
        ),
        seed(
            "3",
            "Camisa Rosa Pastel",
            ClothingType::Shirt,
            "rosa",
            "Zara",
            "https://i.pinimg.com/736x/85/45/9b/85459baf7f68204dcf08f509de2a1fb3.jpg",
            "Camisa elegante rosa claro",
        ),
        // Pantalones
        seed(
            "4",
            "Pantalón Negro Formal",
            ClothingType::Pants,
            "negro",
            "Zara",
            "https://media.falabella.com/falabellaPE/120195552_01/w=1500,h=1500,fit=pad",
            "Pantalón de vestir negro",
        ),
        seed(
            "5",
            "Jeans Azul Oscuro",
            ClothingType::Pants,
            "azul oscuro",
            "Levi's",
            "https://armatura.com.co/cdn/shop/files/pantalon-hombre-jean-slim-azul-oscuro-frente.webp?v=1727450366&width=1080",
            "Jeans clásicos de corte slim",
        ),
        seed(
            "6",
            "Pantalón Beige Chino",
            ClothingType::Pants,
            "beige",
            "Gap",
            "https://www.patucos.pe/wp-content/uploads/2024/04/13-00530-016-L-5.jpg",
            "Pantalón casual chino",
        ),
        // Zapatos
        seed(
            "7",
            "Zapatos Oxford Marrón",
            ClothingType::Shoes,
            "marrón",
            "Clarks",
            "https://elbosqueperu.vtexassets.com/arquivos/ids/166202-800-800?v=638369630958100000&width=800&height=800&aspect=true",
            "Zapatos de cuero marrón",
        ),
        seed(
            "8",
            "Zapatillas Blancas",
            ClothingType::Shoes,
            "blanco",
            "Nike",
            "https://img.kwcdn.com/product/fancy/d192cbf0-39e5-41c8-b2ae-e8254e98f5e4.jpg?imageMogr2/auto-orient%7CimageView2/2/w/800/q/70/format/webp",
            "Zapatillas deportivas blancas",
        ),
        seed(
            "9",
            "Zapatos Negros Formales",
            ClothingType::Shoes,
            "negro",
            "Cole Haan",
            "https://i.pinimg.com/474x/7a/38/fb/7a38fb48067b565992cf2a09461c660b.jpg",
            "Zapatos de vestir negros",
        ),
        // Vestidos
        seed(
            "10",
            "Vestido Rojo Elegante",
            ClothingType::Dress,
            "rojo",
            "H&M",
            "https://oechsle.vteximg.com.br/arquivos/ids/22243673-800-800/2950176.jpg?v=638944291512600000",
            "Vestido casual rojo",
        ),
        seed(
            "11",
            "Vestido Negro Cocktail",
            ClothingType::Dress,
            "negro",
            "Forever 21",
            "https://e00-telva.uecdn.es/assets/multimedia/imagenes/2022/07/09/16573240449292.jpg",
            "Vestido elegante para ocasiones especiales",
        ),
        // Chaquetas
        seed(
            "12",
            "Chaqueta Denim Azul",
            ClothingType::Jacket,
            "azul",
            "Levi's",
            "https://shop.mango.com/assets/rcs/pics/static/T3/fotos/S/37074385_TO_B.jpg?imwidth=2048&imdensity=1&ts=1657191237377",
            "Chaqueta de mezclilla clásica",
        ),
        seed(
            "13",
            "Blazer Negro Formal",
            ClothingType::Jacket,
            "negro",
            "Hugo Boss",
            "https://e00-telva.uecdn.es/assets/multimedia/imagenes/2023/03/21/16794083992866.jpg",
            "Blazer elegante para oficina",
        ),
        seed(
            "14",
            "Abrigo Camel",
            ClothingType::Jacket,
            "beige",
            "Zara",
            "https://home.ripley.com.pe/Attachment/WOP_5/2005336696420/2005336696420-1.jpg",
            "Abrigo largo color camel",
        ),
        // Accesorios
        seed(
            "15",
            "Cinturón de Cuero Negro",
            ClothingType::Accessory,
            "negro",
            "Tommy Hilfiger",
            "https://oechsle.vteximg.com.br/arquivos/ids/14234373/2283954.jpg?v=638155767980000000",
            "Cinturón clásico de cuero",
        ),
        seed(
            "16",
            "Reloj Deportivo",
            ClothingType::Accessory,
            "negro",
            "Casio",
            "https://oechsle.vteximg.com.br/arquivos/ids/11314577/imageUrl_2.jpg?v=637986566814100000",
            "Reloj digital deportivo",
        ),
    ]
}

/// Whether an id belongs to the seed catalogue.
#[must_use]
pub fn is_seed_id(id: &str) -> bool {
    matches!(id.parse::<u32>(), Ok(n) if (1..=16).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sixteen_items_with_sequential_ids() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 16);
        for (i, item) in catalog.iter().enumerate() {
            assert_eq!(item.id, (i + 1).to_string());
        }
    }

    #[test]
    fn test_catalog_ids_are_seed_ids() {
        for item in seed_catalog() {
            assert!(is_seed_id(&item.id));
        }
        assert!(!is_seed_id("17"));
        assert!(!is_seed_id("1724854000000"));
        assert!(!is_seed_id("current-selection"));
    }

    #[test]
    fn test_catalog_covers_expected_categories() {
        let catalog = seed_catalog();
        let shirts = catalog
            .iter()
            .filter(|i| i.kind == ClothingType::Shirt)
            .count();
        assert_eq!(shirts, 3);
        assert!(catalog.iter().all(|i| i.brand.is_some()));
    }
}
