pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update_stocks;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod translator;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod model;
    }
    pub mod product {
        pub mod error_code;
        pub mod errors;
        pub mod input;
        pub mod model;
        pub mod repository;
        pub mod validation;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update_stocks;
        }
    }
}
