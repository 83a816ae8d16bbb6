// UI Constants
//
// The assistant fronts a Spanish-language product surface, so every string
// the user sees stays in Spanish.
pub const HEADER_TITLE: &str = "Asistente Wompi";
pub const HEADER_SUBTITLE: &str = "Powered by RAG + LanceDB";

pub const WELCOME_MESSAGE: &str =
    "¡Hola! Soy el asistente virtual de Wompi. ¿En qué puedo ayudarte hoy?";
pub const APOLOGY_MESSAGE: &str =
    "Lo siento, hubo un error al procesar tu mensaje. Por favor, intenta de nuevo.";

pub const INPUT_PLACEHOLDER: &str = "Pregúntame sobre Wompi...";
pub const THINKING_LABEL: &str = "Pensando...";
pub const SOURCES_HEADING: &str = "Fuentes consultadas:";
pub const SUGGESTIONS_HEADING: &str = "Preguntas sugeridas:";

pub const STATUS_CONNECTED: &str = "Conectado";
pub const STATUS_CONNECTING: &str = "Conectando...";
pub const STATUS_ERROR: &str = "Error de conexión";

pub const CONNECTION_BANNER: &str =
    "No se puede conectar al servidor. Asegúrate de que el backend esté ejecutándose en";

pub const USER_LABEL: &str = "Tú";
pub const BOT_LABEL: &str = "Asistente";

// API Constants
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";
pub const CHAT_CATEGORY: &str = "knowledge_base";
