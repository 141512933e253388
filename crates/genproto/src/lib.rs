pub mod api {
    include!("gen/api.rs");
}

pub mod farm {
    include!("gen/farm.rs");
}

pub mod product {
    include!("gen/product.rs");
}

pub mod user {
    include!("gen/user.rs");
}

pub mod order {
    include!("gen/order.rs");
}

pub mod sub_order {
    include!("gen/sub_order.rs");
}

pub mod payment {
    include!("gen/payment.rs");
}
