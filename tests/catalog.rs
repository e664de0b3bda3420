use luxe_storefront::domain::product::{
    CatalogQuery, Category, NewProduct, ProductSort, ProductStatus, UpdateProduct,
};
use luxe_storefront::fixtures;
use luxe_storefront::repository::{
    CartReader, CartWriter, CatalogReader, CatalogWriter, DieselStore, FavoriteReader,
    FavoriteWriter, InMemoryCatalog, RepositoryError,
};

mod common;

#[test]
fn seeded_catalog_lists_newest_first() {
    let catalog = InMemoryCatalog::with_products(fixtures::seed_products());

    let (total, items) = catalog.list_products(CatalogQuery::new()).unwrap();

    assert_eq!(total, 12);
    assert_eq!(items.first().map(|p| p.id), Some(12));
    assert_eq!(items.last().map(|p| p.id), Some(1));
}

#[test]
fn queries_filter_conjunctively() {
    let catalog = InMemoryCatalog::with_products(fixtures::seed_products());

    let (published, _) = catalog
        .list_products(CatalogQuery::new().status(ProductStatus::Published))
        .unwrap();
    assert_eq!(published, 10);

    let (clothing_drafts, items) = catalog
        .list_products(
            CatalogQuery::new()
                .category(Category::Clothing)
                .status(ProductStatus::Draft),
        )
        .unwrap();
    assert_eq!(clothing_drafts, 1);
    assert_eq!(items[0].name, "Linen Resort Shirt");

    let (silk_matches, _) = catalog
        .list_products(CatalogQuery::new().search("silk"))
        .unwrap();
    assert_eq!(silk_matches, 1);
}

#[test]
fn pagination_slices_after_filtering() {
    let catalog = InMemoryCatalog::with_products(fixtures::seed_products());

    let (total, page_one) = catalog
        .list_products(CatalogQuery::new().sort(ProductSort::Oldest).paginate(1, 5))
        .unwrap();
    let (_, page_three) = catalog
        .list_products(CatalogQuery::new().sort(ProductSort::Oldest).paginate(3, 5))
        .unwrap();

    assert_eq!(total, 12);
    assert_eq!(page_one.len(), 5);
    assert_eq!(page_one[0].id, 1);
    assert_eq!(page_three.len(), 2);
    assert_eq!(page_three[1].id, 12);
}

#[test]
fn catalog_crud_allocates_ids_and_applies_patches() {
    let catalog = InMemoryCatalog::with_products(fixtures::seed_products());

    let payload = NewProduct::new("Brushed Wool Beret", 6450, Category::Accessories)
        .with_description("Soft brushed wool")
        .with_stock(6)
        .with_status(ProductStatus::Draft);
    let created = catalog.create_product(&payload).unwrap();

    assert_eq!(created.id, 13);
    assert_eq!(created.sales, 0);

    let update = UpdateProduct::new()
        .price_cents(5900)
        .status(ProductStatus::Published);
    let updated = catalog.update_product(created.id, &update).unwrap();
    assert_eq!(updated.price_cents, 5900);
    assert_eq!(updated.status, ProductStatus::Published);
    // Untouched fields survive the patch.
    assert_eq!(updated.name, "Brushed Wool Beret");
    assert_eq!(updated.stock, 6);

    catalog.delete_product(created.id).unwrap();
    assert!(catalog.get_product_by_id(created.id).unwrap().is_none());

    let err = catalog.delete_product(created.id).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));

    let err = catalog.update_product(999, &UpdateProduct::new()).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn deleting_a_product_leaves_cart_and_favorites_alone() {
    let test_db = common::TestDb::new();
    let store = DieselStore::new(test_db.pool());
    let catalog = InMemoryCatalog::with_products(fixtures::seed_products());

    let line = luxe_storefront::domain::cart::CartLineItem {
        product_id: 2,
        name: "Silk Evening Scarf".to_string(),
        price_cents: 7900,
        image: "/assets/products/2.svg".to_string(),
        color: "Gold".to_string(),
        size: "M".to_string(),
        quantity: 1,
    };
    store.set_cart(std::slice::from_ref(&line)).unwrap();
    store.set_favorites(&[2, 5]).unwrap();

    catalog.delete_product(2).unwrap();

    // Stale references are tolerated, not cascaded away.
    assert_eq!(store.get_cart().unwrap(), vec![line]);
    assert_eq!(store.get_favorites().unwrap(), vec![2, 5]);
    assert!(catalog.get_product_by_id(2).unwrap().is_none());
}
