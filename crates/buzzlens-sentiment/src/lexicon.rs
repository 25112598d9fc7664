//! Word valences for the compound scorer.
//!
//! Keys are lowercase single tokens. Values are mean human valence ratings on
//! a `[-4.0, 4.0]` scale.

pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("acclaim", 2.3),
    ("acclaimed", 2.2),
    ("accomplish", 1.8),
    ("accomplished", 1.9),
    ("achievement", 2.1),
    ("achievements", 2.2),
    ("admire", 2.4),
    ("admired", 2.3),
    ("adore", 2.9),
    ("advantage", 1.0),
    ("affordable", 1.5),
    ("agree", 1.5),
    ("amazing", 2.8),
    ("applaud", 2.0),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("appreciation", 2.3),
    ("approval", 2.1),
    ("approved", 1.8),
    ("awesome", 3.1),
    ("award", 2.5),
    ("awarded", 1.7),
    ("beautiful", 2.9),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("best", 3.2),
    ("better", 1.9),
    ("bold", 1.6),
    ("boost", 1.7),
    ("boosted", 1.5),
    ("breakthrough", 2.1),
    ("brilliant", 2.8),
    ("celebrate", 2.7),
    ("celebrated", 2.7),
    ("champion", 2.9),
    ("charming", 2.8),
    ("cheer", 2.3),
    ("clean", 1.7),
    ("comfortable", 2.3),
    ("confident", 2.2),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("cool", 1.3),
    ("creative", 1.9),
    ("delight", 2.9),
    ("delighted", 2.8),
    ("delicious", 2.7),
    ("easy", 1.9),
    ("effective", 2.1),
    ("efficient", 1.8),
    ("encourage", 2.3),
    ("energetic", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("fan", 1.3),
    ("fans", 1.1),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("free", 2.3),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("gain", 2.0),
    ("gains", 1.8),
    ("generous", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("greatest", 3.2),
    ("grow", 1.4),
    ("growth", 1.6),
    ("happy", 2.7),
    ("healthy", 1.7),
    ("help", 1.7),
    ("helpful", 1.8),
    ("hero", 2.6),
    ("honest", 2.3),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("incredible", 2.7),
    ("innovative", 2.0),
    ("inspiring", 2.9),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kind", 2.4),
    ("launch", 0.3),
    ("lead", 0.9),
    ("leading", 1.1),
    ("like", 2.0),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loyal", 2.1),
    ("lucky", 1.8),
    ("nice", 1.8),
    ("optimistic", 1.3),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("please", 1.3),
    ("pleased", 1.9),
    ("popular", 1.8),
    ("positive", 2.6),
    ("praise", 2.6),
    ("praised", 2.2),
    ("profit", 1.9),
    ("profitable", 1.9),
    ("progress", 1.8),
    ("promising", 1.7),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("recommended", 0.8),
    ("record", 0.4),
    ("recovery", 1.4),
    ("reliable", 1.9),
    ("relief", 2.1),
    ("resolved", 0.7),
    ("respect", 2.1),
    ("reward", 2.0),
    ("rewarding", 2.4),
    ("rich", 2.6),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("save", 2.2),
    ("secure", 1.4),
    ("smart", 1.7),
    ("smooth", 1.7),
    ("solid", 0.6),
    ("strong", 2.3),
    ("stunning", 1.6),
    ("success", 2.7),
    ("successful", 2.8),
    ("super", 2.9),
    ("superb", 3.1),
    ("support", 1.7),
    ("supported", 1.3),
    ("surge", 0.6),
    ("sustainable", 1.3),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("thrilled", 1.9),
    ("thriving", 2.0),
    ("top", 0.8),
    ("trust", 2.3),
    ("trusted", 2.1),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("victory", 2.8),
    ("welcome", 2.0),
    ("win", 2.8),
    ("winner", 2.8),
    ("winning", 2.4),
    ("wins", 2.7),
    ("wonderful", 2.7),
    ("wow", 2.8),
    // Negative
    ("abuse", -3.2),
    ("accident", -2.1),
    ("accused", -1.6),
    ("afraid", -2.2),
    ("alarm", -1.4),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("attack", -2.1),
    ("awful", -2.0),
    ("backlash", -1.6),
    ("bad", -2.5),
    ("ban", -2.6),
    ("banned", -2.0),
    ("bankrupt", -2.6),
    ("bankruptcy", -2.8),
    ("blame", -1.4),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("bug", -1.1),
    ("bugs", -1.2),
    ("collapse", -2.2),
    ("complain", -1.5),
    ("complaint", -1.2),
    ("complaints", -1.7),
    ("concern", -0.4),
    ("concerned", -1.3),
    ("concerns", -1.2),
    ("conflict", -1.3),
    ("confused", -1.3),
    ("controversial", -0.8),
    ("controversy", -0.8),
    ("crash", -1.7),
    ("crisis", -3.1),
    ("criticism", -1.9),
    ("criticize", -1.6),
    ("criticized", -1.5),
    ("cut", -1.1),
    ("cuts", -1.2),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("death", -2.9),
    ("debt", -1.5),
    ("decline", -1.1),
    ("defeat", -2.0),
    ("delay", -1.3),
    ("delayed", -0.9),
    ("delays", -1.2),
    ("destroy", -2.8),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("dispute", -1.7),
    ("down", -0.4),
    ("drop", -1.1),
    ("dropped", -0.7),
    ("dumb", -2.3),
    ("error", -1.7),
    ("expensive", -1.3),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fall", -1.0),
    ("fear", -2.2),
    ("fears", -1.8),
    ("fines", -1.2),
    ("fire", -1.4),
    ("fraud", -2.8),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("guilty", -1.8),
    ("hack", -1.3),
    ("hacked", -1.7),
    ("hard", -0.4),
    ("harm", -2.5),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("ignored", -1.3),
    ("illegal", -2.6),
    ("issue", -0.7),
    ("issues", -1.0),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lawsuit", -0.9),
    ("layoffs", -2.0),
    ("lie", -1.6),
    ("lies", -1.8),
    ("lose", -1.7),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lost", -1.3),
    ("mess", -1.5),
    ("miss", -0.6),
    ("mistake", -1.7),
    ("negative", -2.7),
    ("outage", -1.6),
    ("pain", -2.3),
    ("panic", -2.3),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("protest", -1.0),
    ("recall", -1.3),
    ("refund", -0.4),
    ("reject", -1.7),
    ("rejected", -2.3),
    ("risk", -1.1),
    ("risky", -0.8),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.7),
    ("scandal", -1.9),
    ("scared", -1.9),
    ("shock", -1.6),
    ("shocking", -1.7),
    ("shutdown", -1.5),
    ("sick", -2.3),
    ("slow", -1.0),
    ("slump", -1.6),
    ("steal", -2.2),
    ("stolen", -2.2),
    ("stress", -1.8),
    ("struggle", -1.3),
    ("struggling", -1.4),
    ("stupid", -2.4),
    ("sucks", -1.5),
    ("sue", -1.3),
    ("sued", -1.2),
    ("terrible", -2.1),
    ("threat", -2.4),
    ("toxic", -2.4),
    ("tragedy", -3.4),
    ("trouble", -1.7),
    ("ugly", -2.3),
    ("unfair", -2.1),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useless", -1.8),
    ("violation", -2.2),
    ("war", -2.9),
    ("warning", -1.4),
    ("waste", -1.8),
    ("weak", -1.9),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    // Sentiment-bearing interjections
    ("no", -1.2),
    ("yes", 1.7),
    ("lol", 1.8),
    ("wtf", -2.8),
];

/// Degree modifiers: intensify (`+`) or dampen (`-`) the next sentiment word.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("amazingly", 0.293),
    ("awfully", 0.293),
    ("completely", 0.293),
    ("considerably", 0.293),
    ("decidedly", 0.293),
    ("deeply", 0.293),
    ("enormously", 0.293),
    ("entirely", 0.293),
    ("especially", 0.293),
    ("exceptionally", 0.293),
    ("extremely", 0.293),
    ("fabulously", 0.293),
    ("fully", 0.293),
    ("greatly", 0.293),
    ("hella", 0.293),
    ("highly", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("intensely", 0.293),
    ("majorly", 0.293),
    ("more", 0.293),
    ("most", 0.293),
    ("particularly", 0.293),
    ("purely", 0.293),
    ("quite", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("substantially", 0.293),
    ("thoroughly", 0.293),
    ("totally", 0.293),
    ("tremendously", 0.293),
    ("uber", 0.293),
    ("unbelievably", 0.293),
    ("unusually", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kinda", -0.293),
    ("less", -0.293),
    ("little", -0.293),
    ("marginally", -0.293),
    ("occasionally", -0.293),
    ("partly", -0.293),
    ("scarcely", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("sorta", -0.293),
];

/// Tokens that flip the polarity of a sentiment word up to three positions later.
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
    "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't",
    "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't",
    "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't",
    "wouldn't", "rarely", "seldom", "despite",
];
