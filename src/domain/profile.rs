use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub real_name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub mastodon: String,
    pub twitter: String,
    pub telegram: String,
    pub github: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Intron014".to_string(),
            real_name: "Jorge".to_string(),
            role: "Software Developer & Hardware Engineering Student".to_string(),
            location: "Madrid, Spain".to_string(),
            email: "me@intron014.com".to_string(),
            mastodon: "@intron014@x.intron014.com".to_string(),
            twitter: "@intron014".to_string(),
            telegram: "@intron014".to_string(),
            github: "@Intron014".to_string(),
        }
    }
}

impl Profile {
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.real_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.real_name)
        }
    }

    #[must_use]
    pub fn whoami(&self) -> String {
        format!(
            "{}\n{}\nLocated in {}",
            self.display_name(),
            self.role,
            self.location
        )
    }

    #[must_use]
    pub fn contact_card(&self) -> String {
        format!(
            "\nContact Information:\n    Email:    {}\n    Mastodon: {}\n    Twitter:  {}\n    Telegram: {}\n    GitHub:   {}\n",
            self.email, self.mastodon, self.twitter, self.telegram, self.github
        )
    }
}
