pub mod modules {
    pub mod calendar {
        pub mod core {
            pub mod event;
            pub mod period;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events_for_period {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod envelope;
            }
            pub mod outbound {
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod concurrent_create_tests;
    }
}
