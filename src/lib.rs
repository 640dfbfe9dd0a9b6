pub mod shared {
    pub mod infrastructure {
        pub mod clock;
        pub mod entry_store;
        pub mod month_locks;
        pub mod roster;
        pub mod sqlite;
    }
}

pub mod modules {
    pub mod check_ins {
        pub mod core {
            pub mod date_range;
            pub mod period;
            pub mod points;
            pub mod shift;
            pub mod shift_entry;
            pub mod summary;
            pub mod year_month;
        }
        pub mod use_cases {
            pub mod submit_check_in {
                pub mod command;
                pub mod dedup_guard;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod summarize_period {
                pub mod aggregator;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod query;
            }
            pub mod export_check_ins {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod query;
                pub mod records_csv;
            }
            pub mod list_employees {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_month_locks {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
