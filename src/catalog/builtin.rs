//! The store's own hand-made range.

use crate::{
    prices::Price,
    products::{Category, Product, ProductError, ProductId, Rating},
};

fn product(
    id: i64,
    name: &str,
    price: u64,
    category: Category,
    image: &str,
    description: &str,
    rating_tenths: u8,
) -> Result<Product, ProductError> {
    Ok(Product {
        id: ProductId::new(id)?,
        name: name.to_string(),
        price: Price::new(price),
        category,
        image: image.to_string(),
        description: description.to_string(),
        rating: Rating::from_tenths(rating_tenths)?,
    })
}

pub(super) fn products() -> Result<Vec<Product>, ProductError> {
    Ok(vec![
        product(
            1,
            "Sunflower Crochet Bouquet",
            899,
            Category::Gifts,
            "/sunflower.jpg",
            "A forever-blooming bouquet of handcrafted sunflowers. Perfect for brightening up a corner or gifting a loved one.",
            50,
        )?,
        product(
            2,
            "Boho Daisy Sling Bag",
            1299,
            Category::Bags,
            "/bag.jpg",
            "Chic and sturdy, this daisy-patterned sling bag is lined with cotton fabric and features a secure button closure.",
            48,
        )?,
        product(
            3,
            "Pastel Tulip Keychain",
            249,
            Category::Accessories,
            "/keychain.webp",
            "Carry a little bloom wherever you go. Made with soft milk cotton yarn.",
            49,
        )?,
        product(
            4,
            "Cozy Woolen Headband",
            499,
            Category::Accessories,
            "/band.webp",
            "Keep your ears warm and your style on point with this twisted chunky knit headband.",
            47,
        )?,
        product(
            5,
            "Mini Succulent Pot",
            599,
            Category::Decor,
            "/pot.webp",
            "No water needed! A cute amigurumi succulent in a mini pot, perfect for desk decor.",
            50,
        )?,
        product(
            6,
            "Granny Square Tote",
            1899,
            Category::Bags,
            "/tote.webp",
            "Vintage vibes meet modern utility. Large capacity tote bag made from premium acrylic yarn.",
            49,
        )?,
    ])
}
