//! Catalog pipeline properties checked against a recorded API response.

use catalog_core::prelude::*;

fn load() -> Catalog {
    let raw = include_str!("fixtures/products.json");
    let response: ProductsResponse = serde_json::from_str(raw).unwrap();
    Catalog::new(response.products)
}

fn filter_states(catalog: &Catalog) -> Vec<FilterState> {
    let mut states = vec![FilterState::new()];

    for category in catalog.categories() {
        states.push(FilterState::new().with_category(category));
    }
    for stock in StockStatus::ALL {
        states.push(FilterState::new().with_stock(stock));
    }
    for rating in [1.0, 3.0, 4.0, 5.0] {
        states.push(FilterState::new().with_min_rating(rating));
    }
    for term in ["red", "CHANEL", "  apple ", "nothing-like-this"] {
        states.push(FilterState::new().with_search(term));
    }
    states.push(FilterState::new().with_price_range(10.0, Some(50.0)));
    states.push(FilterState::new().with_price_range(100.0, None));
    states.push(
        FilterState::new()
            .with_category("beauty")
            .with_stock(StockStatus::LowStock)
            .with_min_rating(3.0),
    );
    states
}

#[test]
fn test_count_matches_predicate_conjunction() {
    let catalog = load();

    for state in filter_states(&catalog) {
        let term = state.search.to_lowercase();
        let expected = catalog
            .products()
            .iter()
            .filter(|p| {
                let search = term.is_empty()
                    || p.title.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || p.brand.as_deref().is_some_and(|b| b.to_lowercase().contains(&term));
                let category = state.category.as_deref().map_or(true, |c| p.category == c);
                let price = p.price >= state.min_price
                    && state.max_price.map_or(true, |max| p.price <= max);
                let rating = state.min_rating.map_or(true, |min| p.rating >= min);
                let stock = match state.stock {
                    StockStatus::All => true,
                    StockStatus::InStock => p.stock > 0,
                    StockStatus::LowStock => p.stock > 0 && p.stock < 50,
                    StockStatus::OutOfStock => p.stock == 0,
                };
                search && category && price && rating && stock
            })
            .count();

        assert_eq!(catalog.apply(&state).len(), expected, "state: {:?}", state);
    }
}

#[test]
fn test_clear_restores_full_unsorted_list() {
    let catalog = load();
    let mut state = FilterState::new()
        .with_search("red")
        .with_category("beauty")
        .with_price_range(5.0, Some(10.0))
        .with_stock(StockStatus::InStock)
        .with_sort(SortKey::PriceHighToLow);
    assert!(catalog.apply(&state).len() < catalog.len());

    state.clear();
    let ids: Vec<u64> = catalog.apply(&state).iter().map(|p| p.id).collect();
    let all: Vec<u64> = catalog.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, all);
}

#[test]
fn test_sort_orders_are_monotonic() {
    let catalog = load();

    let asc = catalog.apply(&FilterState::new().with_sort(SortKey::PriceLowToHigh));
    assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

    let desc = catalog.apply(&FilterState::new().with_sort(SortKey::PriceHighToLow));
    assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));

    let rating = catalog.apply(&FilterState::new().with_sort(SortKey::Rating));
    assert!(rating.windows(2).all(|w| w[0].rating >= w[1].rating));
}

#[test]
fn test_related_products_rules() {
    let catalog = load();

    for product in catalog.products() {
        let related = catalog.related_to(product, RELATED_LIMIT);
        assert!(related.len() <= RELATED_LIMIT);
        assert!(related.iter().all(|r| r.id != product.id));
        assert!(related.iter().all(|r| r.category == product.category));
    }

    let mascara = catalog.find(1).unwrap();
    let ids: Vec<u64> = catalog
        .related_to(mascara, RELATED_LIMIT)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![2, 3, 4, 5]);

    let bed = catalog.find(11).unwrap();
    assert!(catalog.related_to(bed, RELATED_LIMIT).is_empty());
}

#[test]
fn test_query_string_drives_pipeline() {
    let catalog = load();
    let state = FilterState::from_query("category=groceries&stock=in-stock&sort=rating");
    let ids: Vec<u64> = catalog.apply(&state).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![17]);
}

#[test]
fn test_category_counts_cover_catalog() {
    let catalog = load();
    let counts = catalog.category_counts();
    let names: Vec<&str> = counts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["beauty", "fragrances", "furniture", "groceries"]);
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), catalog.len());
}

#[test]
fn test_router_walkthrough() {
    let mut router = ViewRouter::new();
    router.enter_catalog().unwrap();
    router.load(load());

    let selected = router.select(6).unwrap();
    assert_eq!(selected.title, "Calvin Klein CK One");
    assert_eq!(router.related(RELATED_LIMIT).len(), 1);

    let breakdown = RatingBreakdown::for_product(router.catalog().unwrap().find(1).unwrap());
    assert_eq!(breakdown.total_reviews, 3);
    assert_eq!(breakdown.bars[3].count, 2);

    router.back().unwrap();
    assert_eq!(router.view(), View::Catalog);
}
