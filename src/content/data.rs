// SPDX-License-Identifier: MPL-2.0
//! Portfolio records.

use super::{Certificate, ContactEntry, Education, HomeProfile, Profile, Project, Skill};

pub const HOME: HomeProfile = HomeProfile {
    owner: "Abderrahmane Baaziz",
    headline: "Junior Penetration Tester | Cybersecurity Student",
    summary: "Passionate cybersecurity professional specializing in penetration testing \
              and network security. eJPTv2 certified with hands-on experience in \
              vulnerability assessment and ethical hacking.",
    education: Education {
        institution: "University of Algiers",
        degree: "Licence 2 - Computer Science",
        focus_areas: &["Web Security", "Mobile App hacking", "Web Dev"],
    },
};

pub const TECHNICAL_SKILLS: &[Skill] = &[
    Skill {
        name: "Penetration Testing",
        level: 70,
    },
    Skill {
        name: "Network Security",
        level: 65,
    },
    Skill {
        name: "Web Security",
        level: 75,
    },
    Skill {
        name: "Python",
        level: 70,
    },
    Skill {
        name: "Linux",
        level: 85,
    },
    Skill {
        name: "OWASP Top 10",
        level: 80,
    },
    Skill {
        name: "Web dev",
        level: 67,
    },
];

pub const TOOLS_AND_PLATFORMS: &[Skill] = &[
    Skill {
        name: "Kali Linux",
        level: 90,
    },
    Skill {
        name: "Burp Suite",
        level: 85,
    },
    Skill {
        name: "Metasploit",
        level: 60,
    },
    Skill {
        name: "Wireshark",
        level: 45,
    },
    Skill {
        name: "Nmap",
        level: 90,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Magisk Android Root",
        kind: "Security Tool",
        description: "Magisk is an open-source suite for customizing Android (Android 6.0+), \
                      offering features like root access (MagiskSU), module installation for \
                      modifying partitions, boot image management (MagiskBoot), and running \
                      code in app processes (Zygisk).",
        technologies: &["C++", "Android"],
        repository_url: "https://github.com/abdo0vuln/Magisk",
    },
    Project {
        title: "Capture the Flag (CTF) Site (team project)",
        kind: "Web Application",
        description: "A beginner-friendly CTF site with 8 challenges in cryptography, OSINT, \
                      and math, designed to help you test and improve your problem-solving \
                      skills.",
        technologies: &["HTML5", "Bootstrap", "NodeJs", "MongoDB"],
        repository_url: "https://github.com/octobit-club/octobit_opening_event",
    },
    Project {
        title: "Portfolio Website",
        kind: "Web Application",
        description: "A personal portfolio website to showcase projects, skills, and \
                      achievements. Built using React, hosted on Vercel.",
        technologies: &["React", "vercel"],
        repository_url: "https://github.com/abdo0vuln/porfolio",
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        name: "eJPTv2",
        issuer: "eLearnSecurity",
        date: "2024",
        description: "Professional certification demonstrating practical penetration \
                      testing skills",
        skills: &["Network Penetration Testing", "Web App Security", "Host Security"],
    },
    Certificate {
        name: "Introduction to Cybersecurity",
        issuer: "Cisco Networking Academy",
        date: "2023",
        description: "Foundation in cybersecurity concepts and best practices",
        skills: &["Security Fundamentals", "Network Security", "Security Policies"],
    },
];

pub const CONTACT_INFO: &[ContactEntry] = &[
    ContactEntry {
        label: "Email",
        value: "contact.baaziz@gmail.com",
    },
    ContactEntry {
        label: "Location",
        value: "Algiers, Algeria",
    },
    ContactEntry {
        label: "University",
        value: "University of Algiers",
    },
];

pub const PROFILES: &[Profile] = &[
    Profile {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/abderrahmane-baaziz-0305032bb/",
        icon: "icons/linkedin.png",
    },
    Profile {
        label: "GitHub",
        url: "https://github.com/abdo0vuln",
        icon: "icons/github.png",
    },
    Profile {
        label: "TryHackMe",
        url: "https://tryhackme.com/p/vuln0sec",
        icon: "icons/hackthebox.svg",
    },
];
