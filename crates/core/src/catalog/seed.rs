//! Built-in curricula bundled at compile time.
//!
//! Predefined paths are rebuilt from here on every start; only custom paths
//! come from storage.

use super::types::{Difficulty, LearningPath, Resource, ResourceType};

use Difficulty::{Advanced, Beginner, Intermediate};
use ResourceType::{Article, Course};

fn resource(
    id: &str,
    title: &str,
    description: &str,
    url: &str,
    kind: ResourceType,
    difficulty: Difficulty,
    topics: &[&str],
) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        kind,
        difficulty,
        topics: topics.iter().map(|t| t.to_string()).collect(),
        completed: false,
    }
}

fn path(id: &str, title: &str, description: &str, resources: Vec<Resource>) -> LearningPath {
    LearningPath {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        resources,
        progress: None,
        is_custom: None,
        user_id: None,
    }
}

/// Full Stack Development
fn fullstack() -> LearningPath {
    path(
        "fullstack",
        "Full Stack Development",
        "Learn to build complete web applications from frontend to backend",
        vec![
            resource(
                "html-css",
                "HTML & CSS Fundamentals",
                "Learn the building blocks of web development",
                "https://developer.mozilla.org/en-US/docs/Learn/HTML",
                Course,
                Beginner,
                &["HTML", "CSS", "Web Development"],
            ),
            resource(
                "javascript",
                "JavaScript Essentials",
                "Master the core language of web development",
                "https://javascript.info/",
                Course,
                Beginner,
                &["JavaScript", "Web Development"],
            ),
            resource(
                "react",
                "React.js - Building User Interfaces",
                "Create interactive UIs with the popular React library",
                "https://react.dev/",
                Article,
                Intermediate,
                &["React", "Frontend", "JavaScript"],
            ),
            resource(
                "node",
                "Node.js Backend Development",
                "Build scalable server-side applications with Node.js",
                "https://nodejs.org/en/learn",
                Course,
                Intermediate,
                &["Node.js", "Backend", "JavaScript"],
            ),
            resource(
                "databases",
                "Database Design & SQL",
                "Learn to design and interact with databases",
                "https://www.postgresql.org/docs/current/tutorial.html",
                Course,
                Intermediate,
                &["SQL", "Databases", "PostgreSQL"],
            ),
        ],
    )
}

/// Data Science & Analytics
fn datascience() -> LearningPath {
    path(
        "datascience",
        "Data Science & Analytics",
        "Master the tools and techniques for analyzing and visualizing data",
        vec![
            resource(
                "python",
                "Python for Data Science",
                "Learn the primary language for data analysis",
                "https://www.python.org/about/gettingstarted/",
                Course,
                Beginner,
                &["Python", "Data Science"],
            ),
            resource(
                "pandas",
                "Data Analysis with Pandas",
                "Master the popular Python library for data manipulation",
                "https://pandas.pydata.org/docs/getting_started/index.html",
                Article,
                Intermediate,
                &["Python", "Pandas", "Data Analysis"],
            ),
            resource(
                "visualization",
                "Data Visualization Techniques",
                "Learn to create effective visualizations",
                "https://matplotlib.org/stable/tutorials/index.html",
                Course,
                Intermediate,
                &["Data Visualization", "Matplotlib", "Seaborn"],
            ),
            resource(
                "statistics",
                "Statistical Analysis",
                "Understand the statistical foundations of data science",
                "https://www.khanacademy.org/math/statistics-probability",
                Course,
                Intermediate,
                &["Statistics", "Probability", "Data Science"],
            ),
            resource(
                "ml-intro",
                "Introduction to Machine Learning",
                "Get started with core ML concepts and algorithms",
                "https://scikit-learn.org/stable/user_guide.html",
                Course,
                Advanced,
                &["Machine Learning", "scikit-learn", "AI"],
            ),
        ],
    )
}

/// Machine Learning & AI
fn machine_learning() -> LearningPath {
    path(
        "machine-learning",
        "Machine Learning & AI",
        "Dive into the world of artificial intelligence and machine learning",
        vec![
            resource(
                "ml-fundamentals",
                "Machine Learning Fundamentals",
                "Understanding the core concepts of ML",
                "https://www.coursera.org/learn/machine-learning",
                Course,
                Intermediate,
                &["Machine Learning", "AI", "Algorithms"],
            ),
            resource(
                "deep-learning",
                "Neural Networks & Deep Learning",
                "Build and train neural networks for various tasks",
                "https://www.deeplearning.ai/",
                Course,
                Advanced,
                &["Deep Learning", "Neural Networks", "AI"],
            ),
            resource(
                "nlp",
                "Natural Language Processing",
                "Learn how computers process and analyze human language",
                "https://huggingface.co/learn/nlp-course/chapter1/1",
                Course,
                Advanced,
                &["NLP", "Deep Learning", "AI"],
            ),
            resource(
                "computer-vision",
                "Computer Vision",
                "Working with images and video data",
                "https://www.tensorflow.org/tutorials/images/classification",
                Article,
                Advanced,
                &["Computer Vision", "Deep Learning", "AI"],
            ),
            resource(
                "llm-intro",
                "Introduction to Large Language Models",
                "Understanding the technology behind ChatGPT and other LLMs",
                "https://openai.com/research/",
                Article,
                Advanced,
                &["LLM", "NLP", "AI"],
            ),
        ],
    )
}

/// All predefined paths in display order
pub fn predefined_paths() -> Vec<LearningPath> {
    vec![fullstack(), datascience(), machine_learning()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::CUSTOM_PATH_PREFIX;
    use std::collections::HashSet;

    #[test]
    fn test_three_paths_of_five() {
        let paths = predefined_paths();
        let ids: Vec<_> = paths.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["fullstack", "datascience", "machine-learning"]);
        assert!(paths.iter().all(|p| p.resources.len() == 5));
    }

    #[test]
    fn test_seed_starts_untracked() {
        for path in predefined_paths() {
            assert_eq!(path.progress, None);
            assert!(!path.is_custom());
            assert!(!path.id.starts_with(CUSTOM_PATH_PREFIX));
            assert!(path.resources.iter().all(|r| !r.completed));
        }
    }

    #[test]
    fn test_resource_ids_unique_within_path() {
        for path in predefined_paths() {
            let ids: HashSet<_> = path.resources.iter().map(|r| &r.id).collect();
            assert_eq!(ids.len(), path.resources.len(), "duplicate in {}", path.id);
        }
    }
}
