pub mod application {
    pub mod detection {
        pub mod analyze;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod reconcile;
    }
    pub mod detection {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod session;
        pub mod value_objects;
        pub mod use_cases {
            pub mod analyze;
        }
    }
}
