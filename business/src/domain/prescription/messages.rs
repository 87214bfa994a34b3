//! Fixed texts exchanged with the inference endpoint and shown to the user.

/// Instruction sent as the system message of every transcription request.
pub const SYSTEM_INSTRUCTION: &str = "Sos experto en leer y traducir ordenes medicas.
Solo traduci sobre ordenes medicas.
Responde de forma corta y consisa.
No podes dar un diagnostico sobre la orden medica.
Aclarar el % de precision de la traducción.";

/// Text part of the user message, sent alongside the image.
pub const USER_PROMPT: &str = "Clarificame lo que dice la receta medica?";

/// Shown while a transcription is pending.
pub const LOADING_MESSAGE: &str = "Traduciendo";

/// Shown in place of the result when a transcription fails.
pub const FAILURE_MESSAGE: &str = "Error al traducir foto";

/// Shown when the camera cannot be used.
pub const PERMISSION_MESSAGE: &str = "We need your permission to show the camera";
