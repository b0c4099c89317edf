//! Localized text produced by the terminal session.

use termfolio_types::config::Locale;

/// Every user-visible string the session appends, for one locale.
#[derive(Debug)]
pub struct Messages {
    /// Seed lines shown when the session starts.
    pub banner: [&'static str; 3],
    /// First line of the `help` block.
    pub help_header: &'static str,
    /// Note appended by `projects`.
    pub loading_projects: &'static str,
    /// Biography printed by `about`.
    pub about: &'static [&'static str],
    /// Contact block printed by `contact`.
    pub contact: &'static [&'static str],
    /// Note appended by `home`.
    pub going_home: &'static str,
    /// Prefix of the error line for unknown input.
    pub unrecognized: &'static str,
    /// Hint following the error line.
    pub hint: &'static str,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }

    /// Error line text for unrecognized input.
    pub fn unrecognized_line(&self, input: &str) -> String {
        format!("{}: {input}", self.unrecognized)
    }
}

static EN: Messages = Messages {
    banner: [
        "Welcome to my terminal portfolio 🚀",
        "Type 'help' to see the available commands",
        "To get started, type 'home' or browse with the commands",
    ],
    help_header: "Available commands:",
    loading_projects: "Loading projects...",
    about: &[
        "Hi! I'm a full-stack developer who loves technology.",
        "I focus on building modern, efficient web applications.",
        "Technologies I use often:",
        "  • Frontend: React, TypeScript, Tailwind CSS",
        "  • Backend: Node.js, Python, PostgreSQL",
        "  • Tools: Git, Docker, AWS",
    ],
    contact: &[
        "You can reach me through:",
        "  ✉️ Email: your.email@example.com",
        "  💼 LinkedIn: linkedin.com/in/your-profile",
        "  🐙 GitHub: github.com/your-user",
        "  🐦 Twitter: @your-user",
    ],
    going_home: "Going back to the start...",
    unrecognized: "unrecognized command",
    hint: "type the help command to see available commands",
};

static ES: Messages = Messages {
    banner: [
        "Bienvenido a mi Portafolio Terminal 🚀",
        "Escribe 'help' para ver los comandos disponibles",
        "Para comenzar, escribe 'home' o navega con los comandos",
    ],
    help_header: "Comandos disponibles:",
    loading_projects: "Cargando proyectos...",
    about: &[
        "¡Hola! Soy un desarrollador full-stack apasionado por la tecnología.",
        "Me especializo en crear aplicaciones web modernas y eficientes.",
        "Tecnologías que uso frecuentemente:",
        "  • Frontend: React, TypeScript, Tailwind CSS",
        "  • Backend: Node.js, Python, PostgreSQL",
        "  • Herramientas: Git, Docker, AWS",
    ],
    contact: &[
        "Puedes contactarme a través de:",
        "  ✉️ Email: tu.email@ejemplo.com",
        "  💼 LinkedIn: linkedin.com/in/tu-perfil",
        "  🐙 GitHub: github.com/tu-usuario",
        "  🐦 Twitter: @tu-usuario",
    ],
    going_home: "Volviendo al inicio...",
    unrecognized: "Comando no reconocido",
    hint: "Escribe 'help' para ver los comandos disponibles",
};
