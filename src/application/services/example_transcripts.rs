use crate::domain::{GenerationParams, Language};

/// Canned script used whenever the text-generation provider is unavailable
/// or fails. One translation per supported language, with the podcast name
/// and tagline interpolated into the opening line.
pub fn example_transcript(language: Language, params: &GenerationParams) -> String {
    let name = &params.podcast_name;
    let tagline = &params.tagline;

    match language {
        Language::French => format!(
            "<Person1>Bienvenue à {name}! {tagline}</Person1>\n\
             <Person2>Aujourd'hui, nous allons discuter de ce contenu fascinant.</Person2>\n\
             <Person1>Exactement! Commençons par analyser les points principaux.</Person1>\n\
             <Person2>D'accord, le premier point important est...</Person2>"
        ),
        Language::English => format!(
            "<Person1>Welcome to {name}! {tagline}</Person1>\n\
             <Person2>Today, we're going to discuss this fascinating content.</Person2>\n\
             <Person1>Exactly! Let's start by analyzing the main points.</Person1>\n\
             <Person2>Alright, the first important point is...</Person2>"
        ),
        Language::Spanish => format!(
            "<Person1>¡Bienvenidos a {name}! {tagline}</Person1>\n\
             <Person2>Hoy vamos a discutir este contenido fascinante.</Person2>\n\
             <Person1>¡Exactamente! Empecemos analizando los puntos principales.</Person1>\n\
             <Person2>De acuerdo, el primer punto importante es...</Person2>"
        ),
        Language::German => format!(
            "<Person1>Willkommen bei {name}! {tagline}</Person1>\n\
             <Person2>Heute werden wir über diesen faszinierenden Inhalt diskutieren.</Person2>\n\
             <Person1>Genau! Beginnen wir mit der Analyse der Hauptpunkte.</Person1>\n\
             <Person2>In Ordnung, der erste wichtige Punkt ist...</Person2>"
        ),
        Language::Italian => format!(
            "<Person1>Benvenuti a {name}! {tagline}</Person1>\n\
             <Person2>Oggi discuteremo di questo affascinante contenuto.</Person2>\n\
             <Person1>Esattamente! Iniziamo analizzando i punti principali.</Person1>\n\
             <Person2>D'accordo, il primo punto importante è...</Person2>"
        ),
        Language::Portuguese => format!(
            "<Person1>Bem-vindos ao {name}! {tagline}</Person1>\n\
             <Person2>Hoje vamos discutir este conteúdo fascinante.</Person2>\n\
             <Person1>Exatamente! Vamos começar analisando os pontos principais.</Person1>\n\
             <Person2>Certo, o primeiro ponto importante é...</Person2>"
        ),
        Language::Dutch => format!(
            "<Person1>Welkom bij {name}! {tagline}</Person1>\n\
             <Person2>Vandaag gaan we deze fascinerende inhoud bespreken.</Person2>\n\
             <Person1>Precies! Laten we beginnen met het analyseren van de belangrijkste punten.</Person1>\n\
             <Person2>Oké, het eerste belangrijke punt is...</Person2>"
        ),
        Language::Russian => format!(
            "<Person1>Добро пожаловать в {name}! {tagline}</Person1>\n\
             <Person2>Сегодня мы обсудим этот увлекательный контент.</Person2>\n\
             <Person1>Именно! Давайте начнем с анализа основных моментов.</Person1>\n\
             <Person2>Хорошо, первый важный момент...</Person2>"
        ),
        Language::Chinese => format!(
            "<Person1>欢迎收听 {name}！{tagline}</Person1>\n\
             <Person2>今天我们将讨论这个引人入胜的内容。</Person2>\n\
             <Person1>没错！让我们从分析主要观点开始。</Person1>\n\
             <Person2>好的，第一个重要观点是...</Person2>"
        ),
        Language::Japanese => format!(
            "<Person1>{name}へようこそ！{tagline}</Person1>\n\
             <Person2>今日は、この魅力的なコンテンツについて議論します。</Person2>\n\
             <Person1>その通り！主なポイントを分析することから始めましょう。</Person1>\n\
             <Person2>わかりました、最初の重要なポイントは...</Person2>"
        ),
    }
}
