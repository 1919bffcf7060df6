#[cfg(debug_assertions)]
pub fn contact_endpoint() -> Option<&'static str> {
    // Local relay, only when explicitly requested at build time
    option_env!("CONTACT_ENDPOINT")
        .or(option_env!("CONTACT_ENDPOINT_DEV").map(|_| "http://localhost:3001/api/contact"))
}

#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_ENDPOINT")  // None keeps the form as a local acknowledgement
}

/// Upper bound for a contact delivery before it is reported as failed.
pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;

/// How long the acknowledgement banner stays on screen.
pub const ACK_DISMISS_MS: u32 = 6_000;
