// Hosted form relay used by the contact form and the assessment report
// dispatch. The access key is a public client-side token, not a secret.
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const RELAY_ACCESS_KEY: &str = "2737653e-178b-49b4-ad00-ab8feac7a6ef";
