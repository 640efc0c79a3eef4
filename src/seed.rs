use crate::schema::{
    Experience, ExperienceIcon, ExperienceKind, ProjectStatus, Publication, PublicationBadge,
    ResearchProject,
};

pub fn research_projects() -> Vec<ResearchProject> {
    vec![
        ResearchProject {
            id: "1".into(),
            title: "Green Catalytic Processes".into(),
            description: "Development of environmentally benign catalytic systems for organic transformations using renewable feedstocks and minimal waste generation.".into(),
            status: ProjectStatus::Current,
            period: "2023-Present".into(),
            image_url: "https://images.unsplash.com/photo-1582719508461-905c673771fd?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=300".into(),
            tags: vec!["Catalysis".into(), "Sustainability".into(), "Green Chemistry".into()],
            link: Some("#".into()),
        },
        ResearchProject {
            id: "2".into(),
            title: "Novel Synthetic Methodologies".into(),
            description: "Investigation of transition metal-catalyzed cross-coupling reactions for the synthesis of complex organic molecules with pharmaceutical applications.".into(),
            status: ProjectStatus::Completed,
            period: "2021-2023".into(),
            image_url: "https://images.unsplash.com/photo-1628595351029-c2bf17511435?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=300".into(),
            tags: vec!["Synthesis".into(), "Metal Catalysis".into(), "Drug Discovery".into()],
            link: Some("#".into()),
        },
        ResearchProject {
            id: "3".into(),
            title: "Advanced Analytical Techniques".into(),
            description: "Development of new analytical methods for characterizing complex organic compounds using state-of-the-art spectroscopic techniques.".into(),
            status: ProjectStatus::InProgress,
            period: "2022-2024".into(),
            image_url: "https://images.unsplash.com/photo-1576086213369-97a306d36557?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=300".into(),
            tags: vec!["Spectroscopy".into(), "Analysis".into(), "Methods".into()],
            link: Some("#".into()),
        },
    ]
}

pub fn publications() -> Vec<Publication> {
    vec![
        Publication {
            id: "1".into(),
            title: "Sustainable Catalytic Approaches for Complex Organic Synthesis".into(),
            journal: "Nature Chemistry".into(),
            year: 2023,
            summary: "This work presents novel green chemistry methodologies that significantly reduce environmental impact while maintaining high efficiency in complex molecule synthesis. The research demonstrates innovative catalyst design principles that could revolutionize industrial organic chemistry processes.".into(),
            citations: 127,
            views: 2451,
            featured: true,
            badge: Some(PublicationBadge::Featured),
            pdf_url: Some("#".into()),
            external_url: Some("#".into()),
        },
        Publication {
            id: "2".into(),
            title: "Transition Metal Catalysis in Cross-Coupling Reactions: New Frontiers".into(),
            journal: "Journal of Organic Chemistry".into(),
            year: 2022,
            summary: "An comprehensive investigation into novel transition metal catalysts for C-C bond formation, offering improved selectivity and reduced reaction times compared to traditional methods. The study includes mechanistic insights and practical applications.".into(),
            citations: 89,
            views: 1823,
            featured: false,
            badge: Some(PublicationBadge::PeerReviewed),
            pdf_url: Some("#".into()),
            external_url: Some("#".into()),
        },
        Publication {
            id: "3".into(),
            title: "Advanced Spectroscopic Methods for Organic Structure Determination".into(),
            journal: "Angewandte Chemie".into(),
            year: 2021,
            summary: "Development of cutting-edge analytical techniques combining multiple spectroscopic methods for rapid and accurate structural elucidation of complex organic compounds, with applications in natural product chemistry and drug discovery.".into(),
            citations: 156,
            views: 3127,
            featured: false,
            badge: Some(PublicationBadge::Collaboration),
            pdf_url: Some("#".into()),
            external_url: Some("#".into()),
        },
    ]
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".into(),
            title: "Senior Research Scientist".into(),
            organization: "Stanford University".into(),
            period: "2020 - Present".into(),
            description: "Leading research in sustainable organic synthesis and green chemistry methodologies. Managing a team of 8 graduate students and postdocs.".into(),
            kind: ExperienceKind::Work,
            current: true,
            icon: ExperienceIcon::University,
        },
        Experience {
            id: "2".into(),
            title: "Postdoctoral Researcher".into(),
            organization: "MIT Chemistry Department".into(),
            period: "2017 - 2020".into(),
            description: "Developed novel catalytic systems for asymmetric synthesis under the supervision of Prof. Johnson. Published 8 peer-reviewed papers.".into(),
            kind: ExperienceKind::Research,
            current: false,
            icon: ExperienceIcon::Flask,
        },
        Experience {
            id: "3".into(),
            title: "Ph.D. in Organic Chemistry".into(),
            organization: "Harvard University".into(),
            period: "2012 - 2017".into(),
            description: "Thesis: \"Novel Approaches to Catalytic C-H Activation\" - Awarded the departmental excellence prize for outstanding research.".into(),
            kind: ExperienceKind::Education,
            current: false,
            icon: ExperienceIcon::GraduationCap,
        },
        Experience {
            id: "4".into(),
            title: "B.S. in Chemistry, Summa Cum Laude".into(),
            organization: "UC Berkeley".into(),
            period: "2008 - 2012".into(),
            description: "Graduated with highest honors. Undergraduate research in total synthesis of natural products. Phi Beta Kappa member.".into(),
            kind: ExperienceKind::Education,
            current: false,
            icon: ExperienceIcon::Medal,
        },
    ]
}
