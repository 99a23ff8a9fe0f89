use super::Phrase;

pub(super) fn en(phrase: Phrase) -> &'static str {
    match phrase {
        Phrase::About => "About Me",
        Phrase::Projects => "Projects",
        Phrase::Contact => "Contact",
        Phrase::Cv => "Resume",
        Phrase::Start => "start",
        Phrase::Guest => "Guest User",
        Phrase::LogOff => "Log Off",
        Phrase::TurnOff => "Turn Off",
        Phrase::Email => "Email",
        Phrase::Internet => "Internet",
        Phrase::Documents => "My Documents",
        Phrase::Pictures => "My Pictures",
        Phrase::Music => "My Music",
        Phrase::ControlPanel => "Control Panel",
        Phrase::Run => "Run...",
        Phrase::Skills => "Skills",
        Phrase::Experience => "Professional Experience",
        Phrase::Education => "Education",
        Phrase::Languages => "Languages",
        Phrase::Summary => "Professional Summary",
        Phrase::Send => "Send Message",
        Phrase::Subject => "Subject",
        Phrase::To => "To",
        Phrase::Placeholder => "Type your message here...",
        Phrase::AboutTitle => "About Me - Notepad",
        Phrase::ProjectsTitle => "My Projects - Explorer",
        Phrase::ContactTitle => "Contact - Outlook Express",
        Phrase::CvTitle => "Resume - WordPad",
        Phrase::MusicTitle => "My Music - Windows Media Player",
    }
}

pub(super) fn pt(phrase: Phrase) -> &'static str {
    match phrase {
        Phrase::About => "Sobre Mim",
        Phrase::Projects => "Projetos",
        Phrase::Contact => "Contato",
        Phrase::Cv => "Currículo",
        Phrase::Start => "iniciar",
        Phrase::Guest => "Usuário Convidado",
        Phrase::LogOff => "Fazer Logoff",
        Phrase::TurnOff => "Desligar",
        Phrase::Email => "E-mail",
        Phrase::Internet => "Internet",
        Phrase::Documents => "Meus Documentos",
        Phrase::Pictures => "Minhas Imagens",
        Phrase::Music => "Minhas Músicas",
        Phrase::ControlPanel => "Painel de Controle",
        Phrase::Run => "Executar...",
        Phrase::Skills => "Habilidades",
        Phrase::Experience => "Experiência Profissional",
        Phrase::Education => "Educação",
        Phrase::Languages => "Idiomas",
        Phrase::Summary => "Resumo Profissional",
        Phrase::Send => "Enviar Mensagem",
        Phrase::Subject => "Assunto",
        Phrase::To => "Para",
        Phrase::Placeholder => "Digite sua mensagem aqui...",
        Phrase::AboutTitle => "Sobre Mim - Bloco de Notas",
        Phrase::ProjectsTitle => "Meus Projetos - Explorer",
        Phrase::ContactTitle => "Contato - Outlook Express",
        Phrase::CvTitle => "Currículo - WordPad",
        Phrase::MusicTitle => "Minhas Músicas - Windows Media Player",
    }
}
