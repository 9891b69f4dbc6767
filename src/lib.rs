pub mod shared {
    pub mod core {
        pub mod caller;
        pub mod clock;
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod blob_store;
    }
}

pub mod modules {
    pub mod attachments {
        pub mod core {
            pub mod upload;
        }
        pub mod use_cases {
            pub mod manage_attachment {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod archival;
            pub mod authorization;
            pub mod clock_time;
            pub mod filter;
            pub mod patch;
        }
        pub mod use_cases {
            pub mod manage_activities {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod activity_store;
                pub mod activity_store_in_memory;
            }
        }
    }
    pub mod registrations {
        pub mod core {
            pub mod registration;
        }
        pub mod use_cases {
            pub mod manage_registrations {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod registration_store;
                pub mod registration_store_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures {
        pub mod activities;
        pub mod clock;
        pub mod commands {
            pub mod create_activity;
            pub mod register_for_event;
        }
        pub mod state;
        pub mod uploads;
    }
}
