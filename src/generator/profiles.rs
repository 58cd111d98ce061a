//! Ecosystem profiles: one canonical rule table mapping a detected ecosystem
//! to its base image, build instructions, ports, and default environment.

use crate::analyzer::ProjectInspector;
use serde::Serialize;

/// The closed set of ecosystems this tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EcosystemProfile {
    NodeJs,
    Python,
    Go,
    JavaMaven,
    JavaGradle,
    Ruby,
    Php,
    Generic,
}

/// Everything one ecosystem contributes to a build configuration.
pub struct ProfileTemplate {
    pub base_image: &'static str,
    pub instructions: &'static [&'static str],
    pub ports: &'static [&'static str],
    /// Applied only where the key is not already present; user-supplied
    /// values always win.
    pub default_env: &'static [(&'static str, &'static str)],
}

impl EcosystemProfile {
    /// Selects the profile for a project. First marker match wins, evaluated
    /// top to bottom, so exactly one profile is selected per run. Java is
    /// further split on the presence of `pom.xml`.
    pub fn detect(inspector: &ProjectInspector) -> Self {
        if inspector.has_marker_file("package.json") {
            Self::NodeJs
        } else if inspector.has_marker_file("requirements.txt")
            || inspector.has_marker_file("Pipfile")
        {
            Self::Python
        } else if inspector.has_marker_file("go.mod") {
            Self::Go
        } else if inspector.has_marker_file("pom.xml") {
            Self::JavaMaven
        } else if inspector.has_marker_file("build.gradle") {
            Self::JavaGradle
        } else if inspector.has_marker_file("Gemfile") {
            Self::Ruby
        } else if inspector.has_marker_file("composer.json")
            || inspector.has_file_with_extension(&[".php"])
        {
            Self::Php
        } else {
            Self::Generic
        }
    }

    pub fn template(&self) -> &'static ProfileTemplate {
        match self {
            Self::NodeJs => &NODEJS,
            Self::Python => &PYTHON,
            Self::Go => &GO,
            Self::JavaMaven => &JAVA_MAVEN,
            Self::JavaGradle => &JAVA_GRADLE,
            Self::Ruby => &RUBY,
            Self::Php => &PHP,
            Self::Generic => &GENERIC,
        }
    }
}

static NODEJS: ProfileTemplate = ProfileTemplate {
    base_image: "node:18-alpine",
    instructions: &[
        "WORKDIR /app",
        "COPY package*.json ./",
        "RUN npm install",
        "COPY . .",
        "EXPOSE 3000",
        "CMD [\"npm\", \"start\"]",
    ],
    ports: &["3000:3000"],
    default_env: &[("NODE_ENV", "production"), ("PORT", "3000")],
};

static PYTHON: ProfileTemplate = ProfileTemplate {
    base_image: "python:3.9-slim",
    instructions: &[
        "WORKDIR /app",
        "COPY requirements.txt .",
        "RUN pip install --no-cache-dir -r requirements.txt",
        "COPY . .",
        "EXPOSE 8000",
        "CMD [\"python\", \"app.py\"]",
    ],
    ports: &["8000:8000"],
    default_env: &[
        ("PYTHONPATH", "/app"),
        ("FLASK_ENV", "production"),
        ("DJANGO_SETTINGS_MODULE", "project.settings.production"),
    ],
};

// Go and Java contribute no default environment. That asymmetry comes from
// the tables this tool was built around; see DESIGN.md before changing it.
static GO: ProfileTemplate = ProfileTemplate {
    base_image: "golang:1.20-alpine",
    instructions: &[
        "WORKDIR /app",
        "COPY go.* .",
        "RUN go mod download",
        "COPY . .",
        "RUN go build -o main .",
        "EXPOSE 8080",
        "CMD [\"./main\"]",
    ],
    ports: &["8080:8080"],
    default_env: &[],
};

static JAVA_MAVEN: ProfileTemplate = ProfileTemplate {
    base_image: "eclipse-temurin:17-jdk-alpine",
    instructions: &[
        "WORKDIR /app",
        "COPY pom.xml .",
        "COPY .mvn .mvn",
        "COPY mvnw .",
        "RUN chmod +x mvnw",
        "RUN ./mvnw dependency:go-offline",
        "COPY src src",
        "RUN ./mvnw package -DskipTests",
        "EXPOSE 8080",
        "CMD [\"java\", \"-jar\", \"target/*.jar\"]",
    ],
    ports: &["8080:8080"],
    default_env: &[],
};

static JAVA_GRADLE: ProfileTemplate = ProfileTemplate {
    base_image: "eclipse-temurin:17-jdk-alpine",
    instructions: &[
        "WORKDIR /app",
        "COPY build.gradle settings.gradle ./",
        "COPY gradle gradle",
        "COPY gradlew .",
        "RUN chmod +x gradlew",
        "RUN ./gradlew dependencies",
        "COPY src src",
        "RUN ./gradlew build -x test",
        "EXPOSE 8080",
        "CMD [\"java\", \"-jar\", \"build/libs/*.jar\"]",
    ],
    ports: &["8080:8080"],
    default_env: &[],
};

static RUBY: ProfileTemplate = ProfileTemplate {
    base_image: "ruby:3.2-alpine",
    instructions: &[
        "WORKDIR /app",
        "COPY Gemfile Gemfile.lock ./",
        "RUN apk add --no-cache build-base postgresql-dev",
        "RUN bundle install",
        "COPY . .",
        "EXPOSE 3000",
        "CMD [\"bundle\", \"exec\", \"rails\", \"server\", \"-b\", \"0.0.0.0\"]",
    ],
    ports: &["3000:3000"],
    default_env: &[("RAILS_ENV", "production"), ("RACK_ENV", "production")],
};

static PHP: ProfileTemplate = ProfileTemplate {
    base_image: "php:8.2-apache",
    instructions: &[
        "WORKDIR /var/www/html",
        "RUN apt-get update && apt-get install -y \\\n    libzip-dev \\\n    zip \\\n    && docker-php-ext-install zip pdo pdo_mysql",
        "COPY --from=composer:latest /usr/bin/composer /usr/bin/composer",
        "COPY composer.* ./",
        "RUN composer install --no-dev --no-scripts --no-autoloader",
        "COPY . .",
        "RUN composer dump-autoload --optimize",
        "RUN chown -R www-data:www-data /var/www/html",
        "EXPOSE 80",
    ],
    ports: &["80:80"],
    default_env: &[("APP_ENV", "production"), ("APP_DEBUG", "false")],
};

static GENERIC: ProfileTemplate = ProfileTemplate {
    base_image: "ubuntu:latest",
    instructions: &["WORKDIR /app", "COPY . .", "CMD [\"/bin/bash\"]"],
    ports: &[],
    default_env: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::inspector_with;

    #[test]
    fn test_each_marker_selects_its_profile() {
        let cases = [
            ("package.json", EcosystemProfile::NodeJs),
            ("requirements.txt", EcosystemProfile::Python),
            ("Pipfile", EcosystemProfile::Python),
            ("go.mod", EcosystemProfile::Go),
            ("pom.xml", EcosystemProfile::JavaMaven),
            ("build.gradle", EcosystemProfile::JavaGradle),
            ("Gemfile", EcosystemProfile::Ruby),
            ("composer.json", EcosystemProfile::Php),
        ];

        for (marker, expected) in cases {
            let inspector = inspector_with(&[marker]);
            assert_eq!(EcosystemProfile::detect(&inspector), expected, "marker {marker}");
        }
    }

    #[test]
    fn test_php_detected_from_source_files_alone() {
        let inspector = inspector_with(&["public/index.php"]);
        assert_eq!(EcosystemProfile::detect(&inspector), EcosystemProfile::Php);
    }

    #[test]
    fn test_maven_wins_over_gradle() {
        let inspector = inspector_with(&["pom.xml", "build.gradle"]);
        assert_eq!(
            EcosystemProfile::detect(&inspector),
            EcosystemProfile::JavaMaven
        );
    }

    #[test]
    fn test_priority_order_node_beats_go() {
        let inspector = inspector_with(&["go.mod", "package.json"]);
        assert_eq!(
            EcosystemProfile::detect(&inspector),
            EcosystemProfile::NodeJs
        );
    }

    #[test]
    fn test_empty_file_set_falls_back_to_generic() {
        let inspector = inspector_with(&[]);
        let profile = EcosystemProfile::detect(&inspector);

        assert_eq!(profile, EcosystemProfile::Generic);
        assert_eq!(profile.template().base_image, "ubuntu:latest");
        assert!(profile.template().ports.is_empty());
    }

    #[test]
    fn test_unrecognized_markers_fall_back_to_generic() {
        let inspector = inspector_with(&["Makefile", "README.md"]);
        assert_eq!(
            EcosystemProfile::detect(&inspector),
            EcosystemProfile::Generic
        );
    }
}
