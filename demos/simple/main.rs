use storefront_tracking::{
    Cart, ClientConfig, InMemoryCatalog, Order, OrderId, OrderItem, PageRequest, Product,
    ProductId,
};

pub fn main() {
    env_logger::init();

    let endpoint_url = std::env::var("COLLECTOR_ENDPOINT_URL").unwrap();

    let widget = Product::new(45, "Widget", "19.99");
    let mut catalog = InMemoryCatalog::new();
    catalog.insert_product(widget.clone());
    catalog.insert_order(Order {
        id: OrderId(123),
        total: "39.98".to_owned(),
        currency: "USD".to_owned(),
        items: vec![OrderItem {
            product_id: widget.id,
            quantity: 2,
        }],
    });

    let client = ClientConfig::from_endpoint_url(endpoint_url)
        .catalog(catalog)
        .to_client()
        .unwrap();

    // A visitor browses to the product, adds it twice and checks out.
    let product_page = PageRequest {
        is_single_product: true,
        ..PageRequest::page("https://shop.example/product/widget", "Widget")
    };
    client.page_rendered(&product_page);
    client.product_page_rendered(&product_page, Some(&widget));
    client.added_to_cart(ProductId(45), 2);

    let cart = Cart::new().with_item(widget, 2);
    client.cart_displayed(&cart);
    client.checkout_entered(&cart);
    client.order_confirmed(OrderId(123));

    println!("Events sent, see the log output for delivery failures.");
}
