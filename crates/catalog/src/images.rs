//! Stock image selection for products without their own picture.

/// Burger photo, also the fallback.
pub const BURGER_IMAGE: &str = "/assets/burger-hero.jpg";
/// Fries photo.
pub const FRIES_IMAGE: &str = "/assets/fries.jpg";
/// Drinks photo.
pub const JUICE_IMAGE: &str = "/assets/juice.jpg";
/// Dessert photo.
pub const DESSERT_IMAGE: &str = "/assets/dessert.jpg";

const NAME_KEYWORDS: &[(&[&str], &str)] = &[
    (&["burger", "hambúrguer"], BURGER_IMAGE),
    (&["batata", "frit"], FRIES_IMAGE),
    (&["suco", "refrigerante"], JUICE_IMAGE),
    (&["brownie", "torta", "sobremesa"], DESSERT_IMAGE),
];

const CATEGORY_IMAGES: &[(&str, &str)] = &[
    ("populares", BURGER_IMAGE),
    ("acompanhamentos", FRIES_IMAGE),
    ("porcoes", FRIES_IMAGE),
    ("bebidas", JUICE_IMAGE),
    ("sobremesas", DESSERT_IMAGE),
];

/// Picks a stock image for a product.
///
/// Keywords in the name win over the category; anything unmatched gets the burger.
pub fn resolve_image(name: &str, category: &str) -> &'static str {
    let name = name.to_lowercase();

    NAME_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(*k)))
        .map(|(_, image)| *image)
        .or_else(|| {
            CATEGORY_IMAGES
                .iter()
                .find(|(id, _)| *id == category)
                .map(|(_, image)| *image)
        })
        .unwrap_or(BURGER_IMAGE)
}
