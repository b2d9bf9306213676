//! Prompt rendering for the per-business assistant

use crate::domain::entities::business::{Business, Product};

/// Canned reply returned when the generation backend is unavailable
pub const FALLBACK_MESSAGE: &str =
    "I'm currently experiencing high demand. Please try again in a few moments.";

/// Renders the full prompt sent upstream: business context, product
/// catalogue, then the user's turn.
pub fn render_prompt(business: &Business, products: &[Product], user_prompt: &str) -> String {
    format!(
        "{}\nProducts details:\n{}\n\nUser: {}\nAI:",
        render_business_context(business),
        render_product_list(products),
        user_prompt
    )
}

fn render_business_context(business: &Business) -> String {
    format!(
        "You are a friendly, enthusiastic, and knowledgeable AI assistant for {}. \
         Your primary goal is to provide outstanding customer service by answering \
         questions accurately and helping customers find the perfect products to \
         meet their needs. Business description: {} Business industry: {} \
         Business Type: {}",
        business.name, business.description, business.industry, business.business_type
    )
}

fn render_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No product or service available.".to_string();
    }

    let mut out = String::new();
    for product in products {
        out.push_str(&format!(
            "- Product Name: {}, Description: {}, Price: {}, Category: {}, Stock: {}\n",
            product.name, product.description, product.price, product.category, product.stock
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn business() -> Business {
        Business::new(
            Uuid::new_v4(),
            "Brew Lab".to_string(),
            "Specialty coffee roaster".to_string(),
            "Food & Beverage".to_string(),
            "Retail".to_string(),
        )
    }

    #[test]
    fn test_prompt_includes_business_context_and_user_turn() {
        let prompt = render_prompt(&business(), &[], "Do you ship overseas?");

        assert!(prompt.starts_with(
            "You are a friendly, enthusiastic, and knowledgeable AI assistant for Brew Lab."
        ));
        assert!(prompt.contains("Specialty coffee roaster"));
        assert!(prompt.contains("No product or service available."));
        assert!(prompt.ends_with("\n\nUser: Do you ship overseas?\nAI:"));
    }

    #[test]
    fn test_products_render_one_line_each() {
        let b = business();
        let products = vec![
            Product::new(
                b.id,
                "Espresso Blend".to_string(),
                "Dark roast".to_string(),
                18.5,
                "Coffee".to_string(),
                40,
            ),
            Product::new(
                b.id,
                "V60 Dripper".to_string(),
                "Ceramic".to_string(),
                25.0,
                "Equipment".to_string(),
                12,
            ),
        ];

        let rendered = render_prompt(&b, &products, "What do you sell?");
        assert!(rendered.contains(
            "- Product Name: Espresso Blend, Description: Dark roast, Price: 18.5, Category: Coffee, Stock: 40\n"
        ));
        assert!(rendered.contains("- Product Name: V60 Dripper"));
    }
}
