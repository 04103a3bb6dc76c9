// tests/api_tests.rs - Response decoding and request execution
//
// Recorded payloads go through the real envelope types; `execute` is run
// against the in-memory `FakeApi`.

mod common;

use common::{Call, FakeApi};
use nutrient_scope::fixtures::payloads::{
    Categories, EmptySearchPage, ProductFound, ProductMissing, SnacksPage,
};
use nutrient_scope::fixtures::{page_of, ApiPayload};
use nutrient_scope::web_app::api::{execute, Endpoint, FoodApi};
use nutrient_scope::web_app::model::{
    CategoryCatalog, FetchRequest, ListingEvent, PageQuery, ProductDetail, ProductLookup,
    ProductPage, Quantity, QuerySource,
};

#[test]
fn test_decode_category_page() {
    let products = SnacksPage::decode::<ProductPage>().unwrap().into_products();
    assert_eq!(products.len(), 3);

    assert_eq!(products[0].identifier(), Some("3017620422003"));
    assert_eq!(products[0].nutrition_grade(), Some("e"));
    assert_eq!(products[0].ingredients_hierarchy.as_ref().map(Vec::len), Some(3));

    // numeric code, no id
    assert_eq!(products[1].identifier(), Some("7622210449283"));
    // missing name and grade
    assert_eq!(products[2].name(), None);
    assert_eq!(products[2].nutrition_grade(), None);
}

#[test]
fn test_decode_empty_search_page() {
    let products = EmptySearchPage::decode::<ProductPage>().unwrap().into_products();
    assert!(products.is_empty());
}

#[test]
fn test_decode_categories_skips_malformed_entries() {
    let categories = Categories::decode::<CategoryCatalog>().unwrap().into_categories();
    let slugs: Vec<&str> = categories.iter().map(|c| c.slug()).collect();
    assert_eq!(slugs, vec!["snacks", "beverages", "boissons-a-la-mangue"]);
    assert_eq!(categories[0].name, "Snacks");
}

#[test]
fn test_decode_product_lookup() {
    let product = ProductFound::decode::<ProductLookup>()
        .unwrap()
        .into_product()
        .expect("status 1 carries a product");

    assert_eq!(product.product.name(), Some("Nutella"));
    assert_eq!(product.brands.as_deref(), Some("Ferrero"));
    // grade only present alongside the nutriments
    assert_eq!(product.nutrition_grade(), Some("e"));

    let nutriments = product.nutriments.expect("nutriments");
    assert_eq!(nutriments.energy, Some(Quantity::Number(2252.0)));
    assert_eq!(nutriments.carbohydrates.map(|q| q.to_string()), Some("57.5".to_string()));
}

#[test]
fn test_decode_missing_product() {
    let lookup = ProductMissing::decode::<ProductLookup>().unwrap();
    assert!(lookup.into_product().is_none());
}

#[test]
fn test_endpoint_urls() {
    let base = "https://world.openfoodfacts.org";
    assert_eq!(
        Endpoint::Search { term: "peanut butter", page: 2 }.url(base).unwrap().as_str(),
        "https://world.openfoodfacts.org/cgi/search.pl?search_terms=peanut+butter&page=2&json=true"
    );
    assert_eq!(
        Endpoint::Category { slug: "snacks", page: 1 }.url(base).unwrap().as_str(),
        "https://world.openfoodfacts.org/category/snacks.json?page=1"
    );
    assert_eq!(
        Endpoint::Categories.url(base).unwrap().as_str(),
        "https://world.openfoodfacts.org/categories.json"
    );
    assert_eq!(
        Endpoint::Product { code: "3017620422003" }.url(base).unwrap().as_str(),
        "https://world.openfoodfacts.org/api/v0/product/3017620422003.json"
    );
}

#[tokio::test]
async fn test_execute_page_request() {
    let api = FakeApi::new().with_search_page("tea", 3, page_of(1, 2));
    let request = FetchRequest::Page {
        generation: 7,
        query: PageQuery {
            source: QuerySource::Search("tea".into()),
            page: 3,
        },
    };

    match execute(&api, request).await {
        ListingEvent::PageLoaded { generation, page, products } => {
            assert_eq!(generation, 7);
            assert_eq!(page, 3);
            assert_eq!(products.len(), 2);
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert_eq!(api.calls(), vec![Call::Search("tea".into(), 3)]);
}

#[tokio::test]
async fn test_execute_default_source_uses_category_endpoint() {
    let api = FakeApi::new();
    let request = FetchRequest::Page {
        generation: 1,
        query: PageQuery {
            source: QuerySource::Default("snacks".into()),
            page: 1,
        },
    };
    execute(&api, request).await;
    assert_eq!(api.calls(), vec![Call::Category("snacks".into(), 1)]);
}

#[tokio::test]
async fn test_execute_reports_failures() {
    let api = FakeApi::failing();
    let page = FetchRequest::Page {
        generation: 2,
        query: PageQuery {
            source: QuerySource::Category("snacks".into()),
            page: 1,
        },
    };
    assert_eq!(execute(&api, page).await, ListingEvent::PageFailed { generation: 2 });

    let lookup = FetchRequest::Barcode {
        generation: 3,
        code: "42".into(),
    };
    assert_eq!(execute(&api, lookup).await, ListingEvent::BarcodeFailed { generation: 3 });
}

#[tokio::test]
async fn test_execute_barcode_lookup() {
    let detail = ProductFound::decode::<ProductLookup>().unwrap().into_product().unwrap();
    let api = FakeApi::new().with_product("3017620422003", detail);

    let hit = execute(
        &api,
        FetchRequest::Barcode {
            generation: 4,
            code: "3017620422003".into(),
        },
    )
    .await;
    match hit {
        ListingEvent::BarcodeLoaded { generation, product: Some(product) } => {
            assert_eq!(generation, 4);
            assert_eq!(product.name(), Some("Nutella"));
        }
        other => panic!("unexpected event {:?}", other),
    }

    let miss = execute(
        &api,
        FetchRequest::Barcode {
            generation: 5,
            code: "0000".into(),
        },
    )
    .await;
    assert_eq!(miss, ListingEvent::BarcodeLoaded { generation: 5, product: None });
}

#[tokio::test]
async fn test_fake_api_categories() {
    let api = FakeApi {
        categories: Categories::decode::<CategoryCatalog>().unwrap().into_categories(),
        ..FakeApi::new()
    };
    let categories = api.categories().await.unwrap();
    assert_eq!(categories.len(), 3);

    let missing: Option<ProductDetail> = api.product("1").await.unwrap();
    assert!(missing.is_none());
}
