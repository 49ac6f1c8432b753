//! schema.org JSON-LD for search engines.
//!
//! The page embeds the catalog as an `OfferCatalog` inside
//! `<script type="application/ld+json">`.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::content::SiteInfo;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const CURRENCY: &str = "RUB";

#[derive(Serialize)]
struct OfferCatalog<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    seller: Organization<'a>,
    #[serde(rename = "itemListElement")]
    items: Vec<Offer<'a>>,
}

#[derive(Serialize)]
struct Organization<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    telephone: &'a str,
    email: &'a str,
    address: &'a str,
    #[serde(rename = "foundingDate")]
    founding_date: String,
}

#[derive(Serialize)]
struct Offer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "itemOffered")]
    item: Product<'a>,
    price: f64,
    #[serde(rename = "priceCurrency")]
    price_currency: &'static str,
    #[serde(rename = "priceSpecification")]
    price_specification: UnitPrice<'a>,
}

#[derive(Serialize)]
struct Product<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

#[derive(Serialize)]
struct UnitPrice<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    price: f64,
    #[serde(rename = "priceCurrency")]
    price_currency: &'static str,
    #[serde(rename = "unitText")]
    unit_text: &'a str,
}

/// Serialize `catalog` as a schema.org `OfferCatalog` sold by `site`.
pub fn offer_catalog_json_ld(catalog: &Catalog, site: &SiteInfo) -> String {
    let doc = OfferCatalog {
        context: SCHEMA_CONTEXT,
        kind: "OfferCatalog",
        name: format!("Каталог пиломатериалов {}", site.brand),
        seller: Organization {
            kind: "Organization",
            name: site.brand,
            telephone: site.phone,
            email: site.email,
            address: site.address,
            founding_date: site.founded.to_string(),
        },
        items: catalog
            .iter()
            .map(|m| Offer {
                kind: "Offer",
                item: Product {
                    kind: "Product",
                    name: &m.name,
                },
                price: m.price_per_unit_volume,
                price_currency: CURRENCY,
                price_specification: UnitPrice {
                    kind: "UnitPriceSpecification",
                    price: m.price_per_unit_volume,
                    price_currency: CURRENCY,
                    unit_text: &m.unit,
                },
            })
            .collect(),
    };

    // Plain structs of strings and finite floats cannot fail to serialize.
    serde_json::to_string(&doc).unwrap_or_default()
}
