//! The storefront's built-in menu.

use common::{Money, Product};

use crate::Category;

/// Returns the menu categories in display order.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("populares", "Os Mais Pedidos", "⭐"),
        Category::new("hamburgueres", "Hambúrgueres", "🍔"),
        Category::new("bebidas", "Bebidas", "🥤"),
        Category::new("porcoes", "Porções", "🍟"),
        Category::new("sobremesas", "Sobremesas", "🍰"),
    ]
}

/// Returns the menu products. Images are left empty and resolved by the catalog.
pub fn products() -> Vec<Product> {
    let item = |id: &str, name: &str, description: &str, cents: i64, category: &str| {
        Product::new(id, name, Money::from_cents(cents), category).with_description(description)
    };

    vec![
        item(
            "1",
            "Super Burgão",
            "Pão, maionese especial, hambúrguer artesanal, queijo cheddar e salada",
            1550,
            "hamburgueres",
        )
        .popular(),
        item(
            "2",
            "X-Completo",
            "Pão, maionese, hambúrguer, presunto, queijo, ovo e salada",
            1390,
            "hamburgueres",
        )
        .popular(),
        item(
            "3",
            "Suco Natural 400ml",
            "Suco natural de frutas selecionadas, sem açúcar adicionado",
            800,
            "bebidas",
        )
        .popular(),
        item(
            "4",
            "Mini Burgão",
            "Versão menor do nosso clássico, perfeito para petiscar",
            600,
            "hamburgueres",
        )
        .popular(),
        item(
            "5",
            "Batata Frita Média",
            "Batatas selecionadas, crocantes e douradas",
            1250,
            "porcoes",
        )
        .popular(),
        item(
            "6",
            "Batata Frita Grande",
            "Porção generosa de batatas crocantes",
            1750,
            "porcoes",
        )
        .popular(),
        item(
            "7",
            "Duplo Cheddar",
            "Pão, maionese temperada, 2 hambúrgueres, muito cheddar e salada",
            1300,
            "hamburgueres",
        ),
        item(
            "8",
            "X-Bacon Especial",
            "Pão, maionese temperada, hambúrguer, queijo, bacon e salada",
            1280,
            "hamburgueres",
        ),
        item(
            "9",
            "Filezinho",
            "Pão, maionese temperada, filé de frango, queijo e salada",
            1400,
            "hamburgueres",
        ),
        item(
            "10",
            "X-Egg",
            "Pão, maionese temperada, hambúrguer, queijo, ovo e salada",
            1250,
            "hamburgueres",
        ),
        item(
            "11",
            "Refrigerante Lata",
            "Coca-Cola, Guaraná, Fanta ou Sprite",
            450,
            "bebidas",
        ),
        item(
            "12",
            "Água Mineral",
            "Água mineral sem gás 500ml",
            300,
            "bebidas",
        ),
        item(
            "13",
            "Suco de Laranja",
            "Suco natural de laranja 400ml",
            700,
            "bebidas",
        ),
        item(
            "14",
            "Pudim Caseiro",
            "Pudim de leite condensado feito na casa",
            850,
            "sobremesas",
        ),
        item(
            "15",
            "Brownie com Sorvete",
            "Brownie de chocolate quente com bola de sorvete de baunilha",
            1200,
            "sobremesas",
        ),
    ]
}
