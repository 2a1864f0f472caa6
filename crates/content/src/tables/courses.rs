use aware_core::model::{
    Course, CourseId, CourseLevel, CourseModule, Lesson, LessonDraft, LessonId, ModuleId,
};

use crate::repository::ContentError;

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    description: &str,
    level: CourseLevel,
    duration: &str,
    module_count: u32,
    lesson_count: u32,
    topics: &[&str],
) -> Result<Course, ContentError> {
    Ok(Course::new(
        CourseId::new(id)?,
        title,
        description,
        level,
        duration,
        module_count,
        lesson_count,
        topics.iter().map(|t| (*t).to_string()).collect(),
    )?)
}

fn module(
    id: &str,
    course_id: &str,
    title: &str,
    description: &str,
    order: u32,
) -> Result<CourseModule, ContentError> {
    Ok(CourseModule {
        id: ModuleId::new(id)?,
        course_id: CourseId::new(course_id)?,
        title: title.to_string(),
        description: description.to_string(),
        order,
    })
}

pub(crate) fn courses() -> Result<Vec<Course>, ContentError> {
    Ok(vec![
        course(
            "password-security",
            "Password Security Fundamentals",
            "Learn how to create strong passwords, use password managers, and protect your accounts from unauthorized access.",
            CourseLevel::Beginner,
            "2 hours",
            3,
            9,
            &["Password Creation", "Password Managers", "Two-Factor Authentication"],
        )?,
        course(
            "phishing-awareness",
            "Phishing Attack Prevention",
            "Identify and avoid phishing emails, fake websites, and social engineering attacks that target your personal information.",
            CourseLevel::Beginner,
            "1.5 hours",
            2,
            6,
            &["Email Phishing", "Fake Websites", "Social Engineering"],
        )?,
        course(
            "online-privacy",
            "Online Privacy Protection",
            "Understand how your data is collected online and learn practical steps to protect your privacy while browsing.",
            CourseLevel::Intermediate,
            "3 hours",
            4,
            12,
            &["Browser Privacy", "Social Media", "Data Protection", "VPNs"],
        )?,
        course(
            "mobile-security",
            "Mobile Device Security",
            "Secure your smartphone and tablet from malware, theft, and unauthorized access with these essential practices.",
            CourseLevel::Intermediate,
            "2 hours",
            3,
            8,
            &["App Security", "Device Lock", "Public WiFi"],
        )?,
        course(
            "social-media-safety",
            "Social Media Safety",
            "Navigate social media platforms safely, protect your personal information, and recognize online scams.",
            CourseLevel::Beginner,
            "1.5 hours",
            2,
            6,
            &["Privacy Settings", "Safe Sharing", "Scam Recognition"],
        )?,
        course(
            "advanced-threats",
            "Advanced Cyber Threats",
            "Deep dive into ransomware, advanced persistent threats, and sophisticated attack methods targeting individuals.",
            CourseLevel::Advanced,
            "4 hours",
            5,
            15,
            &["Ransomware", "APTs", "Zero-Day Exploits", "Incident Response"],
        )?,
    ])
}

pub(crate) fn modules() -> Result<Vec<CourseModule>, ContentError> {
    Ok(vec![
        module(
            "ps-m1",
            "password-security",
            "Creating Strong Passwords",
            "Learn the fundamentals of creating unbreakable passwords",
            1,
        )?,
        module(
            "ps-m2",
            "password-security",
            "Password Management Tools",
            "Master the use of password managers",
            2,
        )?,
        module(
            "ps-m3",
            "password-security",
            "Multi-Factor Authentication",
            "Add extra layers of security to your accounts",
            3,
        )?,
        module(
            "pa-m1",
            "phishing-awareness",
            "Recognizing Phishing Emails",
            "Spot the red flags in suspicious emails",
            1,
        )?,
        module(
            "pa-m2",
            "phishing-awareness",
            "Safe Browsing Practices",
            "Navigate the web without falling for scams",
            2,
        )?,
    ])
}

pub(crate) fn lessons() -> Result<Vec<Lesson>, ContentError> {
    let drafts = vec![
        LessonDraft {
            id: LessonId::new("ps-l1")?,
            module_id: ModuleId::new("ps-m1")?,
            course_id: CourseId::new("password-security")?,
            title: "Why Strong Passwords Matter".into(),
            description: "Understand the importance of password security in protecting your digital life.".into(),
            duration: "10 min".into(),
            video_url: "https://example.com/video1".into(),
            content: r#"
# Why Strong Passwords Matter

In today's digital world, passwords are the first line of defense protecting your personal information, financial accounts, and digital identity.

## The Problem with Weak Passwords

Every year, millions of accounts are compromised due to weak passwords. Hackers use sophisticated tools that can:

- **Brute force attacks**: Try millions of password combinations per second
- **Dictionary attacks**: Use common words and phrases
- **Credential stuffing**: Use passwords leaked from other breaches

## Real-World Impact

When your password is compromised, attackers can:
- Access your email and reset passwords on other accounts
- Steal your financial information
- Impersonate you on social media
- Access sensitive work documents

## What Makes a Strong Password?

A strong password should be:
1. At least 12 characters long
2. A mix of uppercase, lowercase, numbers, and symbols
3. Not based on personal information
4. Unique for each account
"#
            .into(),
            tips: vec![
                "Never reuse passwords across different accounts".into(),
                "Use a passphrase like \"Coffee@Morning7Days!\" instead of simple words".into(),
                "Change passwords immediately if you suspect a breach".into(),
            ],
            order: 1,
        },
        LessonDraft {
            id: LessonId::new("ps-l2")?,
            module_id: ModuleId::new("ps-m1")?,
            course_id: CourseId::new("password-security")?,
            title: "Creating Memorable Strong Passwords".into(),
            description: "Techniques for creating passwords that are both strong and easy to remember.".into(),
            duration: "15 min".into(),
            video_url: "https://example.com/video2".into(),
            content: r#"
# Creating Memorable Strong Passwords

The biggest challenge with strong passwords is remembering them. Here are proven techniques to create passwords that are both secure and memorable.

## The Passphrase Method

Instead of a random string, use a phrase:
- Think of a sentence: "I drink 3 cups of coffee every morning!"
- Convert to password: "Id3cocEM!"

## The Substitution Method

Take a memorable phrase and substitute:
- Original: "My dog Buddy was born in 2015"
- Password: "MdBwb@2015!"

## The Story Method

Create a mini-story with symbols:
- "2 cats + 1 dog = chaos!"
- Password: "2c+1d=Chaos!"
"#
            .into(),
            tips: vec![
                "Use the first letters of a memorable sentence".into(),
                "Add numbers that mean something to you (but not birthdays)".into(),
                "Include special characters in predictable positions you can remember".into(),
            ],
            order: 2,
        },
        LessonDraft {
            id: LessonId::new("ps-l3")?,
            module_id: ModuleId::new("ps-m2")?,
            course_id: CourseId::new("password-security")?,
            title: "Introduction to Password Managers".into(),
            description: "Learn why password managers are essential for modern digital security.".into(),
            duration: "12 min".into(),
            video_url: "https://example.com/video3".into(),
            content: r#"
# Introduction to Password Managers

Password managers are secure digital vaults that store and manage all your passwords in one place.

## Why Use a Password Manager?

- **Generate strong passwords**: Create unique, complex passwords for every account
- **Store securely**: Encrypted storage protects your credentials
- **Auto-fill**: Quickly log in to websites and apps
- **Sync across devices**: Access your passwords anywhere

## How Password Managers Work

1. You create one master password
2. The manager encrypts all stored passwords
3. Only you can decrypt with your master password
4. Passwords are filled automatically when needed
"#
            .into(),
            tips: vec![
                "Choose a reputable password manager like Bitwarden, 1Password, or LastPass".into(),
                "Make your master password extremely strong - it protects everything".into(),
                "Enable two-factor authentication on your password manager".into(),
            ],
            order: 1,
        },
        LessonDraft {
            id: LessonId::new("pa-l1")?,
            module_id: ModuleId::new("pa-m1")?,
            course_id: CourseId::new("phishing-awareness")?,
            title: "What is Phishing?".into(),
            description: "Understand the basics of phishing attacks and how they target victims.".into(),
            duration: "8 min".into(),
            video_url: "https://example.com/video4".into(),
            content: r#"
# What is Phishing?

Phishing is a type of cyber attack where criminals attempt to trick you into revealing sensitive information by pretending to be a trustworthy entity.

## Types of Phishing

- **Email Phishing**: Fake emails that look like they're from legitimate companies
- **Spear Phishing**: Targeted attacks using personal information about you
- **Smishing**: Phishing via SMS text messages
- **Vishing**: Voice phishing over phone calls

## Common Targets

Phishers typically want:
- Login credentials
- Credit card numbers
- Social Security numbers
- Bank account information
"#
            .into(),
            tips: vec![
                "Never click links in unexpected emails - go directly to the website".into(),
                "Check the sender's email address carefully for misspellings".into(),
                "Legitimate companies never ask for passwords via email".into(),
            ],
            order: 1,
        },
    ];

    drafts
        .into_iter()
        .map(|draft| draft.validate().map_err(ContentError::from))
        .collect()
}
