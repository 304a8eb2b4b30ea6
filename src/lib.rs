pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod change_notifier;
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod session {
        pub mod core {
            pub mod credentials;
            pub mod events;
            pub mod principal;
            pub mod state;
        }
        pub mod use_cases {
            pub mod login {
                pub mod command;
                pub mod decide;
                pub mod decision;
            }
        }
        pub mod store;
    }
    pub mod roster {
        pub mod core {
            pub mod employee;
            pub mod employee_id;
            pub mod events;
            pub mod filter;
            pub mod regions;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod submit_employee_form {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
            }
        }
        pub mod store;
    }
}

pub mod shell;
