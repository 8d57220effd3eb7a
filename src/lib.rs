pub mod shared {
    pub mod http {
        pub mod error;
        pub mod trailing_slash;
    }
    pub mod infrastructure {
        pub mod password_hasher;
    }
}

pub mod modules {
    pub mod basics {
        pub mod use_cases {
            pub mod home {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod display_speed {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod verify_speed {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod search {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delayed_greeting {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod hash_password {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod health {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }

    pub mod users {
        pub mod core {
            pub mod user;
        }
        pub mod use_cases {
            pub mod create_user {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }

    pub mod items {
        pub mod core {
            pub mod item;
        }
        pub mod use_cases {
            pub mod create_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod read_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_priced_item {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod item_store;
                pub mod item_store_in_memory;
            }
        }
    }

    pub mod auth {
        pub mod adapters {
            pub mod inbound {
                pub mod verify_token;
            }
        }
        pub mod use_cases {
            pub mod secure_data {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod login {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
