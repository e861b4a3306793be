//! Popular-dependency and popular-topic reference catalogs
//!
//! Both catalogs are fixed reference lists used as filters: detected
//! dependencies are intersected with [`POPULAR_DEPENDENCIES`], and README
//! text is tested against a word-bounded pattern per [`POPULAR_TOPICS`]
//! entry. [`Catalogs`] is built once at startup and shared read-only for
//! the process lifetime.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;

/// Package names counted as popular when declared in a manifest
pub const POPULAR_DEPENDENCIES: &[&str] = &[
    "react",
    "react-dom",
    "react-redux",
    "react-router",
    "redux",
    "prop-types",
    "classnames",
    "styled-components",
    "vue",
    "angular",
    "jquery",
    "lodash",
    "underscore",
    "ramda",
    "immutable",
    "rxjs",
    "axios",
    "request",
    "node-fetch",
    "express",
    "koa",
    "body-parser",
    "cookie-parser",
    "cors",
    "morgan",
    "socket.io",
    "ejs",
    "pug",
    "handlebars",
    "moment",
    "chalk",
    "colors",
    "commander",
    "yargs",
    "minimist",
    "inquirer",
    "debug",
    "async",
    "bluebird",
    "q",
    "fs-extra",
    "glob",
    "rimraf",
    "mkdirp",
    "semver",
    "uuid",
    "dotenv",
    "winston",
    "webpack",
    "browserify",
    "gulp",
    "grunt",
    "babel-core",
    "babel-loader",
    "babel-runtime",
    "babel-preset-es2015",
    "babel-preset-react",
    "core-js",
    "typescript",
    "eslint",
    "prettier",
    "jest",
    "mocha",
    "chai",
    "sinon",
    "karma",
    "enzyme",
    "supertest",
    "nyc",
    "nodemon",
    "mongoose",
    "mongodb",
    "mysql",
    "pg",
    "redis",
    "passport",
    "jsonwebtoken",
    "bcrypt",
    "graphql",
    "next",
];

/// Topic keywords searched for in README text
pub const POPULAR_TOPICS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "ruby",
    "php",
    "csharp",
    "cpp",
    "go",
    "rust",
    "swift",
    "kotlin",
    "scala",
    "typescript",
    "html",
    "css",
    "sass",
    "bash",
    "shell",
    "android",
    "ios",
    "linux",
    "macos",
    "windows",
    "react",
    "vue",
    "angular",
    "nodejs",
    "express",
    "django",
    "flask",
    "rails",
    "laravel",
    "bootstrap",
    "jquery",
    "webpack",
    "babel",
    "electron",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "firebase",
    "serverless",
    "database",
    "mongodb",
    "mysql",
    "postgresql",
    "redis",
    "graphql",
    "api",
    "http",
    "json",
    "xml",
    "cli",
    "terminal",
    "git",
    "github",
    "open-source",
    "machine-learning",
    "deep-learning",
    "data-science",
    "tensorflow",
    "nlp",
    "security",
    "encryption",
    "blockchain",
    "bitcoin",
    "ethereum",
    "testing",
    "test",
    "continuous-integration",
    "deployment",
    "monitoring",
    "documentation",
    "tutorial",
    "awesome",
    "library",
    "framework",
    "frontend",
    "backend",
    "mobile",
    "game",
    "emulator",
    "compiler",
    "parser",
    "algorithm",
    "data-structures",
    "markdown",
    "emoji",
    "bot",
    "chrome-extension",
    "pwa",
];

/// Process-wide read-only catalogs
pub struct Catalogs {
    dependencies: HashSet<&'static str>,
    topics: Vec<TopicMatcher>,
}

/// One catalog topic with its precompiled word-bounded pattern
struct TopicMatcher {
    topic: &'static str,
    pattern: Regex,
}

impl Catalogs {
    /// Build the standard catalogs
    pub fn standard() -> Result<Self> {
        Self::new(POPULAR_DEPENDENCIES, POPULAR_TOPICS)
    }

    /// Build catalogs from explicit name lists
    ///
    /// Each topic becomes a case-sensitive pattern requiring the topic to
    /// be bounded by non-word characters on both sides.
    pub fn new(dependencies: &[&'static str], topics: &[&'static str]) -> Result<Self> {
        let topics = topics
            .iter()
            .map(|&topic| {
                let pattern = Regex::new(&format!(r"(?:\W{}\W)", regex::escape(topic)))
                    .with_context(|| format!("Invalid topic pattern for '{}'", topic))?;
                Ok(TopicMatcher { topic, pattern })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            dependencies: dependencies.iter().copied().collect(),
            topics,
        })
    }

    /// Whether a package name appears in the popular-dependency catalog
    pub fn is_popular_dependency(&self, name: &str) -> bool {
        self.dependencies.contains(name)
    }

    /// Every catalog topic whose pattern matches the given text
    pub fn matching_topics(&self, text: &str) -> HashSet<String> {
        self.topics
            .iter()
            .filter(|matcher| matcher.pattern.is_match(text))
            .map(|matcher| matcher.topic.to_string())
            .collect()
    }
}
