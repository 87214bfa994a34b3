pub mod application {
    pub mod prescription {
        pub mod session;
        pub mod transcribe;
    }
}

pub mod domain {
    pub mod logger;
    pub mod prescription {
        pub mod errors;
        pub mod messages;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod transcribe;
        }
    }
}
