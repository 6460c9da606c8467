use crate::core::data::WorkItem;
use crate::icons::WorkIcons;
use serde::Serialize;

const WORK: &[WorkItem] = &[
    WorkItem {
        title: "Information Technology Support Specialist",
        company: "Gatestone",
        region: "Kitchener, ON",
        description: "Provide knowledgeable technical support and troubleshooting guidance for networking, Internet, cable, digital phone, and computer issues. Deliver exceptional customer experience while resolving complex workload issues across multi-node environments. Manage hardware and software installations, configurations, and updates while providing 24x7 customer support.",
        technologies: &[
            "Networking",
            "TCP/IP",
            "LAN",
            "Computer Systems",
            "Customer Support",
            "Troubleshooting",
            "Technical Training",
        ],
    },
    WorkItem {
        title: "Scrum Master (Part-time)",
        company: "BusyQA",
        region: "Remote",
        description: "Conducted end-to-end testing of various projects ensuring comprehensive quality assessment. Leveraged test automation frameworks and tools including Jira to develop automated test scripts. Analyzed functional, technical, and non-functional requirements ensuring accurate testing and alignment with project objectives using Zendesk ticketing system.",
        technologies: &[
            "Jira",
            "Zendesk",
            "Test Automation",
            "Scrum",
            "Quality Assurance",
            "Agile",
        ],
    },
    WorkItem {
        title: "Customer Service Representative",
        company: "Majorel",
        region: "Waterloo, ON",
        description: "Interacted with customers daily using active listening and critical thinking to resolve service inquiries. Processed credit card and e-check payments, handled customer complaints, and investigated billing and fraudulent activity concerns. Demonstrated ability to create positive customer relationships and effectively summarize conversation details.",
        technologies: &[
            "Customer Service",
            "Active Listening",
            "Payment Processing",
            "Conflict Resolution",
            "CRM Systems",
        ],
    },
    WorkItem {
        title: "Cloud Technical Solutions Developer",
        company: "Conestoga College",
        region: "Kitchener, ON",
        description: "Assisted in migrating application data from on-premises to cloud platforms (AWS, Azure). Managed Linux technical support for cloud-hosted applications, monitored application health using AWS CloudWatch. Supported version-controlled environments using GitHub and GitLab, and gained exposure to Infrastructure as Code with Terraform.",
        technologies: &[
            "AWS",
            "Azure",
            "Linux",
            "CloudWatch",
            "SharePoint",
            "GitHub",
            "GitLab",
            "Terraform",
            "Docker",
        ],
    },
];

/// Work history, most recent first
pub fn work() -> &'static [WorkItem] {
    WORK
}

/// Work history together with the outlined icons used to render it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkHistory {
    pub icons: WorkIcons,
    pub work: &'static [WorkItem],
}

impl WorkHistory {
    pub fn new(icon_size: u32) -> Self {
        Self {
            icons: WorkIcons::new(icon_size),
            work: WORK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_history_entries() {
        let items = work();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].company, "Gatestone");
        assert!(items.iter().all(|w| !w.technologies.is_empty()));
    }

    #[test]
    fn test_work_history_json_carries_sized_icons() {
        let json = serde_json::to_value(WorkHistory::new(20)).unwrap();

        for key in ["job", "company", "location"] {
            let svg = json["icons"][key].as_str().unwrap();
            assert!(svg.starts_with(r#"<svg width="20" height="20" fill="none""#), "{key}");
        }
        assert_eq!(json["work"].as_array().unwrap().len(), 4);
        assert_eq!(json["work"][1]["company"], "BusyQA");
    }
}
