//! Practice projects shown alongside the curricula.

use super::types::{Difficulty, Project, ProjectLink};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn links(items: &[(&str, &str)]) -> Vec<ProjectLink> {
    items
        .iter()
        .map(|(title, url)| ProjectLink {
            title: title.to_string(),
            url: url.to_string(),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    duration: &str,
    topics: &[&str],
    skills: &[&str],
    resources: &[(&str, &str)],
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        difficulty,
        duration: duration.to_string(),
        topics: strings(topics),
        skills: strings(skills),
        resources: links(resources),
    }
}

/// All practice projects in display order
pub fn practice_projects() -> Vec<Project> {
    vec![
        project(
            "todo-app",
            "Todo List Application",
            "Build a full-stack todo list application with user authentication and data persistence.",
            Difficulty::Beginner,
            "1-2 weeks",
            &["Web Development", "CRUD", "Authentication"],
            &["HTML/CSS", "JavaScript", "React", "Node.js", "Express", "MongoDB"],
            &[
                ("React Documentation", "https://react.dev"),
                ("Express.js Guide", "https://expressjs.com"),
            ],
        ),
        project(
            "data-viz",
            "Data Visualization Dashboard",
            "Create an interactive dashboard to visualize and analyze datasets using D3.js or Chart.js.",
            Difficulty::Intermediate,
            "2-3 weeks",
            &["Data Visualization", "Frontend Development", "API Integration"],
            &["JavaScript", "D3.js", "Chart.js", "API", "CSS Grid"],
            &[
                ("D3.js Documentation", "https://d3js.org"),
                ("Chart.js Documentation", "https://www.chartjs.org"),
            ],
        ),
        project(
            "ml-image",
            "Image Classification with TensorFlow",
            "Build an image classification model using TensorFlow and deploy it as a web application.",
            Difficulty::Advanced,
            "3-4 weeks",
            &["Machine Learning", "Deep Learning", "Web Development"],
            &["Python", "TensorFlow", "JavaScript", "HTML/CSS", "React"],
            &[
                ("TensorFlow Tutorials", "https://www.tensorflow.org/tutorials"),
                ("TensorFlow.js Documentation", "https://www.tensorflow.org/js"),
            ],
        ),
        project(
            "chat-app",
            "Real-time Chat Application",
            "Create a real-time chat application using WebSockets and a modern frontend framework.",
            Difficulty::Intermediate,
            "2-3 weeks",
            &["Real-time Communication", "Web Development", "Authentication"],
            &["JavaScript", "Socket.io", "React", "Node.js", "Express"],
            &[
                ("Socket.io Documentation", "https://socket.io/docs/v4/"),
                ("React Hooks Tutorial", "https://react.dev/reference/react/hooks"),
            ],
        ),
        project(
            "portfolio",
            "Personal Portfolio Website",
            "Design and develop a personal portfolio website to showcase your skills and projects.",
            Difficulty::Beginner,
            "1-2 weeks",
            &["Web Design", "Frontend Development", "Responsive Design"],
            &["HTML/CSS", "JavaScript", "Responsive Design", "UI/UX"],
            &[
                (
                    "CSS Grid Guide",
                    "https://css-tricks.com/snippets/css/complete-guide-grid/",
                ),
                (
                    "Responsive Design Principles",
                    "https://web.dev/responsive-web-design-basics/",
                ),
            ],
        ),
        project(
            "nlp-sentiment",
            "Sentiment Analysis Tool",
            "Build a sentiment analysis tool that can analyze text from various sources and determine sentiment.",
            Difficulty::Advanced,
            "3-4 weeks",
            &["Natural Language Processing", "Machine Learning", "API Development"],
            &["Python", "NLTK", "scikit-learn", "Flask", "JavaScript"],
            &[
                ("NLTK Documentation", "https://www.nltk.org/"),
                ("scikit-learn Documentation", "https://scikit-learn.org/stable/"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_count() {
        assert_eq!(practice_projects().len(), 6, "Should have 6 practice projects");
    }

    #[test]
    fn test_every_project_has_links() {
        for project in practice_projects() {
            assert!(!project.resources.is_empty(), "{} has no links", project.id);
            assert!(!project.skills.is_empty());
        }
    }
}
