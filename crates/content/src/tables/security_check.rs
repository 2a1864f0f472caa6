use aware_core::model::{
    QuestionId, ScoredOption, SecurityLevel, SecurityTier, SelfCheck, SelfCheckQuestion,
};

use crate::repository::ContentError;

fn question(
    id: &str,
    prompt: &str,
    options: [(&str, u32); 4],
) -> Result<SelfCheckQuestion, ContentError> {
    Ok(SelfCheckQuestion::new(
        QuestionId::new(id)?,
        prompt,
        options
            .iter()
            .map(|(text, score)| ScoredOption::new(*text, *score))
            .collect(),
    )?)
}

fn level(tier: SecurityTier, title: &str, description: &str, recs: [&str; 5]) -> SecurityLevel {
    SecurityLevel {
        tier,
        title: title.to_string(),
        description: description.to_string(),
        recommendations: recs.iter().map(|r| (*r).to_string()).collect(),
    }
}

pub(crate) fn self_check() -> Result<SelfCheck, ContentError> {
    let questions = vec![
        question(
            "passwords",
            "How do you manage your passwords?",
            [
                ("I use the same password for most accounts", 0),
                ("I use a few different passwords and try to remember them", 1),
                ("I write them down in a notebook", 1),
                ("I use a password manager with unique passwords for each account", 3),
            ],
        )?,
        question(
            "two-factor",
            "Do you use two-factor authentication (2FA)?",
            [
                ("I don't know what that is", 0),
                ("No, it seems too complicated", 0),
                ("Yes, on some important accounts", 2),
                ("Yes, on all accounts that support it", 3),
            ],
        )?,
        question(
            "updates",
            "How often do you update your devices and software?",
            [
                ("I always click \"remind me later\"", 0),
                ("Occasionally, when I remember", 1),
                ("Regularly, every few weeks", 2),
                ("Immediately when updates are available", 3),
            ],
        )?,
        question(
            "emails",
            "How do you handle suspicious emails?",
            [
                ("I open and click links if they look important", 0),
                ("I sometimes click links if the email looks official", 0),
                ("I'm cautious but sometimes unsure what to do", 1),
                ("I never click links and verify directly with the source", 3),
            ],
        )?,
        question(
            "public-wifi",
            "How do you use public WiFi?",
            [
                ("I connect freely and use it like home WiFi", 0),
                ("I use it but try to avoid banking", 1),
                ("I use a VPN when connecting to public WiFi", 3),
                ("I avoid public WiFi or use mobile data instead", 2),
            ],
        )?,
        question(
            "social-media",
            "What privacy settings do you use on social media?",
            [
                ("Everything is public - I have nothing to hide", 0),
                ("Default settings - I haven't changed anything", 0),
                ("I've adjusted some settings to limit who sees my posts", 2),
                ("I regularly review and restrict my privacy settings", 3),
            ],
        )?,
        question(
            "backups",
            "Do you back up your important data?",
            [
                ("No, I've never thought about it", 0),
                ("Sometimes, when I remember", 1),
                ("Yes, I back up to an external drive occasionally", 2),
                ("Yes, I have automatic backups to cloud and/or external drive", 3),
            ],
        )?,
        question(
            "device-lock",
            "How do you secure your phone?",
            [
                ("No lock - it's easier to access", 0),
                ("Simple 4-digit PIN", 1),
                ("6-digit PIN or pattern", 2),
                ("Biometric (fingerprint/face) plus strong PIN", 3),
            ],
        )?,
    ];

    let levels = vec![
        level(
            SecurityTier::Low,
            "Needs Improvement",
            "Your current security practices leave you vulnerable to common cyber threats. \
             Don't worry - with a few simple changes, you can significantly improve your protection.",
            [
                "Start using a password manager to create unique passwords",
                "Enable two-factor authentication on your email and banking",
                "Be extremely cautious with links in emails and messages",
                "Update your devices and apps as soon as updates are available",
                "Take our beginner courses to learn the fundamentals",
            ],
        ),
        level(
            SecurityTier::Medium,
            "Getting There",
            "You have some good security habits, but there's room for improvement. \
             Focus on the areas where you can strengthen your defenses.",
            [
                "Expand two-factor authentication to more accounts",
                "Consider using a VPN for public WiFi",
                "Review your social media privacy settings",
                "Set up automatic backups for important data",
                "Take our intermediate courses to level up",
            ],
        ),
        level(
            SecurityTier::High,
            "Security Pro",
            "Excellent! You're following best practices and taking your digital security seriously. \
             Stay vigilant and keep learning about new threats.",
            [
                "Stay updated on the latest security threats",
                "Consider helping friends and family improve their security",
                "Explore our advanced courses for deeper knowledge",
                "Set up a family security code for emergencies",
                "Regularly audit your accounts and remove unused ones",
            ],
        ),
    ];

    Ok(SelfCheck::new(questions, levels)?)
}
