use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::schema::{
    ContactMessage, Experience, InsertContactMessage, InsertExperience, InsertPublication,
    InsertResearchProject, InsertUser, Publication, ResearchProject, User,
};
use crate::seed;

/// Append-only record store. Reads return clones; there is no update or delete.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn find_user(&self, id: &str) -> Option<User>;
    async fn find_user_by_username(&self, username: &str) -> Option<User>;
    async fn create_user(&self, user: InsertUser) -> User;

    async fn list_research_projects(&self) -> Vec<ResearchProject>;
    async fn find_research_project(&self, id: &str) -> Option<ResearchProject>;
    async fn create_research_project(&self, project: InsertResearchProject) -> ResearchProject;

    async fn list_publications(&self) -> Vec<Publication>;
    async fn find_publication(&self, id: &str) -> Option<Publication>;
    async fn create_publication(&self, publication: InsertPublication) -> Publication;

    async fn list_experiences(&self) -> Vec<Experience>;
    async fn find_experience(&self, id: &str) -> Option<Experience>;
    async fn create_experience(&self, experience: InsertExperience) -> Experience;

    async fn list_contact_messages(&self) -> Vec<ContactMessage>;
    async fn find_contact_message(&self, id: &str) -> Option<ContactMessage>;
    async fn create_contact_message(&self, message: InsertContactMessage) -> ContactMessage;
}

trait Record: Clone {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_record!(User, ResearchProject, Publication, Experience, ContactMessage);

/// Records of one kind in insertion order, indexed by id.
struct Table<T> {
    inner: RwLock<TableInner<T>>,
}

struct TableInner<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> Table<T> {
    fn new(rows: Vec<T>) -> Self {
        let index = rows
            .iter()
            .enumerate()
            .map(|(pos, r)| (r.id().to_string(), pos))
            .collect();
        Self {
            inner: RwLock::new(TableInner { rows, index }),
        }
    }

    fn all(&self) -> Vec<T> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.rows.clone()
    }

    fn get(&self, id: &str) -> Option<T> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.index.get(id).map(|&pos| inner.rows[pos].clone())
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.rows.iter().find(|r| pred(r)).cloned()
    }

    fn insert(&self, record: T) -> T {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let pos = inner.rows.len();
        inner.index.insert(record.id().to_string(), pos);
        inner.rows.push(record.clone());
        record
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Process-local store, one table per record kind. Lost on restart.
pub struct MemStorage {
    users: Table<User>,
    research_projects: Table<ResearchProject>,
    publications: Table<Publication>,
    experiences: Table<Experience>,
    contact_messages: Table<ContactMessage>,
}

impl MemStorage {
    pub fn empty() -> Self {
        Self {
            users: Table::new(Vec::new()),
            research_projects: Table::new(Vec::new()),
            publications: Table::new(Vec::new()),
            experiences: Table::new(Vec::new()),
            contact_messages: Table::new(Vec::new()),
        }
    }

    /// Store preloaded with the sample projects, publications and experiences.
    pub fn seeded() -> Self {
        Self {
            research_projects: Table::new(seed::research_projects()),
            publications: Table::new(seed::publications()),
            experiences: Table::new(seed::experiences()),
            ..Self::empty()
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn find_user(&self, id: &str) -> Option<User> {
        self.users.get(id)
    }

    async fn find_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|u| u.username == username)
    }

    async fn create_user(&self, user: InsertUser) -> User {
        self.users.insert(User {
            id: new_id(),
            username: user.username,
            password: user.password,
        })
    }

    async fn list_research_projects(&self) -> Vec<ResearchProject> {
        self.research_projects.all()
    }

    async fn find_research_project(&self, id: &str) -> Option<ResearchProject> {
        self.research_projects.get(id)
    }

    async fn create_research_project(&self, p: InsertResearchProject) -> ResearchProject {
        self.research_projects.insert(ResearchProject {
            id: new_id(),
            title: p.title,
            description: p.description,
            status: p.status,
            period: p.period,
            image_url: p.image_url,
            tags: p.tags,
            link: p.link,
        })
    }

    async fn list_publications(&self) -> Vec<Publication> {
        self.publications.all()
    }

    async fn find_publication(&self, id: &str) -> Option<Publication> {
        self.publications.get(id)
    }

    async fn create_publication(&self, p: InsertPublication) -> Publication {
        self.publications.insert(Publication {
            id: new_id(),
            title: p.title,
            journal: p.journal,
            year: p.year,
            summary: p.summary,
            citations: p.citations,
            views: p.views,
            featured: p.featured,
            badge: p.badge,
            pdf_url: p.pdf_url,
            external_url: p.external_url,
        })
    }

    async fn list_experiences(&self) -> Vec<Experience> {
        self.experiences.all()
    }

    async fn find_experience(&self, id: &str) -> Option<Experience> {
        self.experiences.get(id)
    }

    async fn create_experience(&self, e: InsertExperience) -> Experience {
        self.experiences.insert(Experience {
            id: new_id(),
            title: e.title,
            organization: e.organization,
            period: e.period,
            description: e.description,
            kind: e.kind,
            current: e.current,
            icon: e.icon,
        })
    }

    async fn list_contact_messages(&self) -> Vec<ContactMessage> {
        self.contact_messages.all()
    }

    async fn find_contact_message(&self, id: &str) -> Option<ContactMessage> {
        self.contact_messages.get(id)
    }

    async fn create_contact_message(&self, m: InsertContactMessage) -> ContactMessage {
        self.contact_messages.insert(ContactMessage {
            id: new_id(),
            name: m.name,
            email: m.email,
            subject: m.subject,
            message: m.message,
            created_at: OffsetDateTime::now_utc(),
        })
    }
}
