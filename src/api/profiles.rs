pub fn web_profile_endpoint() -> &'static str {
    "/api/v1/users/web_profile_info/"
}

pub fn web_profile_query(username: &str) -> Vec<(String, String)> {
    vec![("username".to_string(), username.to_string())]
}
