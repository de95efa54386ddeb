use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileRecord {
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub followers: u64,
    pub following: u64,
    pub posts: u64,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    pub biography: String,
    #[serde(rename = "externalUrl")]
    pub external_url: String,
    #[serde(rename = "businessCategory")]
    pub business_category: String,
    #[serde(rename = "isBusinessAccount")]
    pub is_business_account: bool,
}

#[derive(Debug, Clone)]
pub struct ProfileSource {
    pub username: String,
    pub full_name: Option<String>,
    pub followers: u64,
    pub followees: u64,
    pub media_count: u64,
    pub profile_pic_url: Option<String>,
    pub is_private: bool,
    pub is_verified: bool,
    pub biography: Option<String>,
    pub external_url: Option<String>,
    pub business_category_name: Option<String>,
    pub is_business_account: bool,
}

/// The subset of profile fields visible whether or not the profile is
/// private.
#[derive(Debug, Clone)]
pub struct PublicSource {
    pub username: String,
    pub full_name: Option<String>,
    pub profile_pic_url: Option<String>,
    pub is_verified: bool,
}

impl ProfileSource {
    pub fn into_record(self) -> ProfileRecord {
        ProfileRecord {
            username: self.username,
            full_name: self.full_name.unwrap_or_default(),
            followers: self.followers,
            following: self.followees,
            posts: self.media_count,
            profile_image: self.profile_pic_url.unwrap_or_default(),
            is_private: self.is_private,
            is_verified: self.is_verified,
            biography: self.biography.unwrap_or_default(),
            external_url: self.external_url.unwrap_or_default(),
            business_category: self.business_category_name.unwrap_or_default(),
            is_business_account: self.is_business_account,
        }
    }
}

impl ProfileRecord {
    /// Record for a private profile reached through the fallback lookup.
    /// Counts and text fields are hidden upstream, so they are reported as
    /// zero/empty rather than omitted.
    pub fn from_public(public: PublicSource) -> Self {
        Self {
            username: public.username,
            full_name: public.full_name.unwrap_or_default(),
            followers: 0,
            following: 0,
            posts: 0,
            profile_image: public.profile_pic_url.unwrap_or_default(),
            is_private: true,
            is_verified: public.is_verified,
            biography: String::new(),
            external_url: String::new(),
            business_category: String::new(),
            is_business_account: false,
        }
    }
}
