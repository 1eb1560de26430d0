//! Prompt templates and request records for every assistant feature.
//!
//! Each feature pairs a request record (deserialized straight from the
//! HTTP body, camelCase on the wire) with a pure builder producing the
//! `(system, user)` prompt pair. The shared base prompt carries the
//! house style rules; feature blocks are appended to it.

use serde::Deserialize;

use crate::client::{ChatMessage, Sampling};

/// Base system prompt shared by every feature.
pub const WRITING_SYSTEM_PROMPT: &str = r#"你是一位专业的中文小说作家。请严格遵循以下写作要求：

## 核心写作原则
删改不符合人写作习惯和生活常识的剧情，并添加过渡剧情填补逻辑别扭的地方，可以进行插叙或者双线叙事。

## 具体要求
1. 使用中文语法和句式，根据已有剧情扩写润色，适当进行扩写，强去AI味。保持文风，文本结构灵活多变，使用中文标点符号。

2. 语句简洁干练，通俗易懂，不水文，强去AI味，使用中文和中文标点符号，需要严格根据前面小说的内容设定，生成合理的剧情推进。

3. 描写要自然，减少修饰，避免使用AI常用词语（如：知道；一丝；坚定的眼神；深吸一口气；缓缓地说；仿佛；好像等等）以及语序，对话描写句式灵活多变。描写情感要求细腻婉转，注意读者黏性和读者情绪。

4. 插入对话要合理，对话要有实际意义并推动剧情，强情绪，适当加入自然、口语化表达，但要贴合人物性格，内容要符合上下文逻辑。

5. 注意读者的情绪变化，增加爽点爽感，根据上下文适当增加网络用语或者网络热梗等元素，看起来不枯燥乏味。

6. 每句话注意区分视角，视角转换时注意人称的正确使用，加强人物代入感，情绪波动。

7. 叙事自然，减少细节，注重生活化细节，句式不要过度工整，打破完美句式。

8. 非线性叙事，不要输出提示词，直出文本。

9. 转折和代入感灵活，不生硬，代入感要抓人，不中断。

10. 避免重复、赘述、突兀，之前出现过的描述描写不要重复描写。

11. 语序要符合人的思考习惯。

## 禁用词汇和句式
- 禁止使用比喻手法，使用通感手法替换，不要出现"如同"、"一丝"、"像"
- 禁止总结式、展望未来式、排比式的语句
- 禁止直接堆叠辞藻，可以采用侧面描写
- 禁止生硬转场
- 禁止出现坚定、一丝、一股、如同、知道等AI偏好的词句
- 禁止描写眼神、目光
- 禁止"，带着……"式的句式

## 格式要求
- 生动有画面感的描写
- 合理分段，重新排版，一句一段或者两句一段，一句一段占据全文70-80％
- 检查语序语法，不要使用AI偏好的语序，使用中文语法语序
- 去除重复的描述，去除重复的修饰，替换掉重复的、高频率的句式结构
- 去除复杂的倒装句和插入语等AI痕迹

请严格按照以上要求创作，让文本更加自然、生动，符合人类的写作习惯。"#;

const CONTINUE_BLOCK: &str = r#"

## 续写专项要求
你正在续写小说内容，需要：
1. 保持原有文风和语调的一致性
2. 确保情节发展的逻辑性和合理性
3. 人物性格和行为要保持一致
4. 适当设置悬念和转折
5. 注意场景描写和情感渲染的平衡

续写策略：
- 情节发展：推进故事主线，增加冲突或转折
- 人物刻画：深化人物形象，展现内心世界
- 场景描写：丰富环境细节，营造氛围
- 对话场景：设计自然的人物对话

请直接开始续写，不要添加任何解释性文字。"#;

const REFINE_BLOCK: &str = r#"

## 扩写润色专项要求
你正在对已有文本进行扩写润色，需要：
1. 保留原文的情节走向和人物设定，不改变既有事实
2. 扩充细节和对话，让场景更有画面感
3. 替换生硬、重复的表达，提升语言自然度
4. 保持原有文风，不引入新的叙述腔调

请直接输出润色后的完整文本，不要添加任何解释性文字。"#;

const OUTLINE_BLOCK: &str = r#"

## 大纲创作专项要求
你是一位专业的小说编辑和剧情设计师，擅长构建引人入胜的故事大纲。请根据用户的要求生成一个详细的小说大纲，严格遵循上述写作要求。

大纲应包含以下结构：
1. 故事主题和核心冲突
2. 主要人物介绍和关系网
3. 整体故事结构（三幕式结构）
4. 分章节详细大纲（每章包含：标题、主要情节、人物发展、悬念设置）
5. 关键转折点和高潮设计
6. 结局设计和主题升华

请确保大纲逻辑清晰，情节紧凑，人物成长合理，具有可读性和商业价值。描述要自然生动，强去AI味。"#;

const CHARACTER_BLOCK: &str = r#"

## 角色设定专项要求
你是一位专业的小说角色设计师，擅长创造立体、生动的小说人物。请根据用户的要求生成一个详细的角色设定，严格遵循上述写作要求。

角色设定应包含以下方面：
1. 基本信息：姓名、年龄、性别、外貌特征
2. 性格特点：详细描述性格特征、优点、缺点
3. 背景故事：成长经历、家庭背景、重要事件
4. 技能能力：专业技能、特长、弱点
5. 人物关系：与主要角色的关系
6. 内心世界：价值观、目标、恐惧、渴望
7. 角色弧光：在故事中的成长变化

请确保角色设定详细、合理，具有文学性和可塑性，描写自然生动，强去AI味。"#;

const WORLD_BLOCK: &str = r#"

## 世界观构建专项要求
你是一位专业的世界观设计师，擅长构建完整、丰富的虚构世界。请根据用户的要求生成一个详细的世界观设定，严格遵循上述写作要求。

世界观设定应包含以下方面：
1. 基础设定：世界名称、基本概念、核心法则
2. 地理环境：大陆分布、气候特征、重要地点
3. 历史背景：重要历史事件、时代变迁、传说故事
4. 社会结构：政治制度、社会阶层、法律体系
5. 文化特色：语言文字、宗教信仰、艺术传统、风俗习惯
6. 经济体系：货币制度、贸易方式、主要产业
7. 科技水平：技术发展程度、重要发明、科技限制
8. 特殊设定：魔法系统、超自然力量、特殊种族等

请确保世界观设定逻辑自洽，细节丰富，具有深度和可扩展性。描述要自然生动，强去AI味。"#;

const DRAFT_BLOCK: &str = r#"

## 章节初稿专项要求
你正在根据大纲撰写章节初稿，需要：
1. 严格按照给出的章节大纲推进情节，不偏离主线
2. 与前文概要保持人物和设定的连贯
3. 场景、对话、情绪铺排完整，成文即可直接阅读
4. 开篇自然承接，结尾留有悬念

请直接输出章节正文，不要添加任何解释性文字。"#;

const REVIEW_BLOCK: &str = r#"

## 审稿专项要求
你是一名严谨的小说编辑，请针对用户提供的文本进行审稿，重点检查是否符合上述写作要求。特别关注：
1. 是否有AI味，使用了禁用词汇和句式
2. 语言是否自然流畅，符合中文表达习惯
3. 情节是否合理，人物是否真实
4. 描写是否生动，避免堆砌辞藻

返回格式：{"strengths": ["..."], "issues": ["..."], "suggestions": ["..."], "scoring": {"plot": 0-10, "character": 0-10, "style": 0-10}}
- strengths：文本优点
- issues：需要改进的问题（重点指出AI味和不自然的地方）
- suggestions：可执行的修改建议（基于上述写作要求）
- scoring：各方面评分

只返回 JSON。"#;

const DECONSTRUCT_BLOCK: &str = r#"

## 文本拆解专项要求
你是一名资深编剧教练，擅长拆解小说文本。请根据用户提供的文本生成拆书报告，严格遵循上述写作要求，分析时注重：
1. 识别文本中的AI味和不自然表达
2. 分析是否符合人类写作习惯
3. 评估语言的生动性和自然度

返回格式：{"summary": "...", "plotBeats": ["..."], "characters": [{"name": "...", "insight": "..."}], "themes": ["..."], "suggestions": ["..."]}
- summary：内容概要（自然表达，无AI味）
- plotBeats：情节节拍分析
- characters：人物分析
- themes：主题分析
- suggestions：改进建议（重点关注去AI味和提升自然度）

不要输出除 JSON 以外的内容。"#;

const NAMING_BLOCK: &str = r#"

## 起名专项要求
你是一名专业的中文创意命名顾问，请根据用户需求提供 5 个命名建议，严格遵循上述写作要求。名称要：
1. 符合中文语言习惯
2. 避免AI味，自然贴切
3. 有文化内涵和意境
4. 读起来朗朗上口

返回格式：{"suggestions": [{"name": "...", "meaning": "..."}]}
- name：名称
- meaning：命名思路解释（自然表达，无AI味）

禁止输出除 JSON 外内容。"#;

fn default_continue_length() -> u32 {
    800
}

fn default_refine_length() -> u32 {
    600
}

fn default_draft_length() -> u32 {
    2000
}

fn default_chapter_count() -> u32 {
    20
}

fn default_scope() -> String {
    "chapter".to_string()
}

fn default_naming_kind() -> String {
    "character".to_string()
}

fn default_gender() -> String {
    "any".to_string()
}

fn default_naming_style() -> String {
    "classical".to_string()
}

/// Continuation of an existing passage.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueWritingRequest {
    pub content: String,
    pub context: Option<String>,
    pub style: Option<String>,
    pub direction: Option<String>,
    #[serde(default = "default_continue_length")]
    pub length: u32,
}

/// Expansion and polish of an existing passage.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    pub content: String,
    pub requirements: Option<String>,
    pub style: Option<String>,
    #[serde(default = "default_refine_length")]
    pub length: u32,
}

/// Full-novel outline generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutlineRequest {
    pub title: String,
    pub genre: Option<String>,
    pub main_plot: Option<String>,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default = "default_chapter_count")]
    pub chapter_count: u32,
    pub style: Option<String>,
}

/// Character profile generation; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCharacterRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub personality: Option<String>,
    pub background: Option<String>,
    pub story_context: Option<String>,
}

/// World-building document generation; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWorldRequest {
    pub world_name: Option<String>,
    pub world_type: Option<String>,
    pub time_period: Option<String>,
    pub technology: Option<String>,
    pub magic: Option<String>,
    pub geography: Option<String>,
    pub culture: Option<String>,
    pub politics: Option<String>,
    pub religion: Option<String>,
    pub additional: Option<String>,
}

/// Chapter draft generation from an outline fragment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDraftRequest {
    pub title: String,
    pub outline: Option<String>,
    pub previous_summary: Option<String>,
    pub style: Option<String>,
    #[serde(default = "default_draft_length")]
    pub length: u32,
}

/// Manuscript review against the house style rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub content: String,
    #[serde(default = "ReviewRequest::default_focus")]
    pub focus: Vec<String>,
}

impl ReviewRequest {
    fn default_focus() -> Vec<String> {
        vec![
            "plot".to_string(),
            "character".to_string(),
            "style".to_string(),
        ]
    }
}

/// Structural deconstruction of a passage or work.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeconstructRequest {
    pub content: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    pub title: Option<String>,
}

/// Name-suggestion generation for characters, places, and so on.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingRequest {
    #[serde(default = "default_naming_kind", alias = "type")]
    pub kind: String,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default = "default_naming_style")]
    pub style: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub background: String,
}

/// Raw chat passthrough: caller supplies the full message list and may
/// override the sampling defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f64>,
}

impl ChatRequest {
    /// Sampling parameters with passthrough defaults filled in.
    pub fn sampling(&self) -> Sampling {
        let defaults = Sampling::default();
        Sampling {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            top_p: self.top_p.unwrap_or(defaults.top_p),
        }
    }
}

fn review_focus_hint(focus: &str) -> Option<&'static str> {
    match focus {
        "plot" => Some("分析剧情逻辑、冲突设置以及节奏安排是否合理。"),
        "character" => Some("关注人物动机、性格一致性与成长曲线。"),
        "style" => Some("评估语言风格、叙述视角以及氛围营造。"),
        "pacing" => Some("检查段落节奏、转场衔接与张弛节奏。"),
        _ => None,
    }
}

fn naming_kind_hint(kind: &str) -> Option<&'static str> {
    match kind {
        "character" => Some("角色名字，需要考虑性格、身份与时代背景。"),
        "organization" => Some("组织或势力名，需要体现定位、理念与风格。"),
        "location" => Some("地点/场景名，需要有空间感与象征意义。"),
        "artifact" => Some("重要物品、圣物或技能名称，需要突出独特性。"),
        _ => None,
    }
}

fn naming_style_hint(style: &str) -> Option<&'static str> {
    match style {
        "classical" => Some("古典、雅致、带有诗意或历史感。"),
        "modern" => Some("现代、简洁、易读易记。"),
        "fantasy" => Some("奇幻、浪漫、富有想象力。"),
        "mystery" => Some("悬疑、冷冽、暗示神秘感。"),
        _ => None,
    }
}

/// `(system, user)` prompt pair for a continuation request.
pub fn continue_writing_prompts(req: &ContinueWritingRequest) -> (String, String) {
    let system = format!("{WRITING_SYSTEM_PROMPT}{CONTINUE_BLOCK}");

    let mut user = format!("请续写以下内容：\n\n{}", req.content);
    if let Some(context) = &req.context {
        user.push_str(&format!("\n\n故事背景：{context}"));
    }
    if let Some(style) = &req.style {
        user.push_str(&format!("\n写作风格要求：{style}"));
    }
    if let Some(direction) = &req.direction {
        user.push_str(&format!("\n续写方向：{direction}"));
    }
    user.push_str(&format!("\n\n请续写约{}字的内容。", req.length));

    (system, user)
}

/// `(system, user)` prompt pair for a refine request.
pub fn refine_prompts(req: &RefineRequest) -> (String, String) {
    let system = format!("{WRITING_SYSTEM_PROMPT}{REFINE_BLOCK}");

    let mut user = format!("请扩写润色以下内容：\n\n{}", req.content);
    if let Some(requirements) = &req.requirements {
        user.push_str(&format!("\n\n润色要求：{requirements}"));
    }
    if let Some(style) = &req.style {
        user.push_str(&format!("\n写作风格要求：{style}"));
    }
    user.push_str(&format!("\n\n润色后全文约{}字。", req.length));

    (system, user)
}

/// `(system, user)` prompt pair for an outline-generation request.
pub fn generate_outline_prompts(req: &GenerateOutlineRequest) -> (String, String) {
    let system = format!("{WRITING_SYSTEM_PROMPT}{OUTLINE_BLOCK}");

    let mut user = format!("请为小说《{}》生成详细大纲。", req.title);
    if let Some(genre) = &req.genre {
        user.push_str(&format!("\n小说类型：{genre}"));
    }
    if let Some(main_plot) = &req.main_plot {
        user.push_str(&format!("\n主要情节：{main_plot}"));
    }
    if !req.characters.is_empty() {
        user.push_str(&format!("\n主要人物：{}", req.characters.join("、")));
    }
    user.push_str(&format!("\n章节数量：{}章", req.chapter_count));
    if let Some(style) = &req.style {
        user.push_str(&format!("\n写作风格：{style}"));
    }

    (system, user)
}

/// `(system, user)` prompt pair for a character-generation request.
pub fn generate_character_prompts(req: &GenerateCharacterRequest) -> (String, String) {
    let system = format!("{WRITING_SYSTEM_PROMPT}{CHARACTER_BLOCK}");

    let mut user = String::from("请生成一个小说角色设定。");
    if let Some(name) = &req.name {
        user.push_str(&format!("\n角色姓名：{name}"));
    }
    if let Some(role) = &req.role {
        user.push_str(&format!("\n角色定位：{role}"));
    }
    if let Some(personality) = &req.personality {
        user.push_str(&format!("\n性格特征：{personality}"));
    }
    if let Some(background) = &req.background {
        user.push_str(&format!("\n背景要求：{background}"));
    }
    if let Some(story_context) = &req.story_context {
        user.push_str(&format!("\n故事背景：{story_context}"));
    }

    (system, user)
}

/// `(system, user)` prompt pair for a world-building-generation request.
pub fn generate_world_prompts(req: &GenerateWorldRequest) -> (String, String) {
    let system = format!("{WRITING_SYSTEM_PROMPT}{WORLD_BLOCK}");

    let mut user = String::from("请生成一个完整的世界观设定。");
    let fields: [(&str, &Option<String>); 10] = [
        ("世界名称", &req.world_name),
        ("世界类型", &req.world_type),
        ("时代背景", &req.time_period),
        ("地理环境", &req.geography),
        ("科技水平", &req.technology),
        ("魔法系统", &req.magic),
        ("文化特色", &req.culture),
        ("政治体系", &req.politics),
        ("宗教信仰", &req.religion),
        ("其他设定", &req.additional),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            user.push_str(&format!("\n{label}：{value}"));
        }
    }

    (system, user)
}

/// `(system, user)` prompt pair for a chapter-draft request.
pub fn generate_draft_prompts(req: &GenerateDraftRequest) -> (String, String) {
    let system = format!("{WRITING_SYSTEM_PROMPT}{DRAFT_BLOCK}");

    let mut user = format!("请撰写章节《{}》的初稿。", req.title);
    if let Some(outline) = &req.outline {
        user.push_str(&format!("\n章节大纲：{outline}"));
    }
    if let Some(previous_summary) = &req.previous_summary {
        user.push_str(&format!("\n前文概要：{previous_summary}"));
    }
    if let Some(style) = &req.style {
        user.push_str(&format!("\n写作风格：{style}"));
    }
    user.push_str(&format!("\n\n正文约{}字。", req.length));

    (system, user)
}

/// `(system, user)` prompt pair for a review request. Unknown focus keys
/// are dropped; an empty focus list falls back to a generic instruction.
pub fn review_prompts(req: &ReviewRequest) -> (String, String) {
    let system = format!("{WRITING_SYSTEM_PROMPT}{REVIEW_BLOCK}");

    let focus_text = req
        .focus
        .iter()
        .filter_map(|f| review_focus_hint(f))
        .collect::<Vec<_>>()
        .join("\n");
    let focus_text = if focus_text.is_empty() {
        "综合评估"
    } else {
        &focus_text
    };

    let user = format!(
        "需要审稿的文本：\n{}\n\n重点关注：\n{}\n\n请按照系统要求审稿并返回 JSON。",
        req.content, focus_text
    );

    (system, user)
}

/// `(system, user)` prompt pair for a deconstruction request.
pub fn deconstruct_prompts(req: &DeconstructRequest) -> (String, String) {
    let system = format!("{WRITING_SYSTEM_PROMPT}{DECONSTRUCT_BLOCK}");

    let title = req.title.as_deref().unwrap_or("未命名作品");
    let user = format!(
        "作品标题：{}\n解析范围：{}\n文本内容：\n{}\n\n请按照系统要求分析并直接返回符合要求的 JSON。",
        title, req.scope, req.content
    );

    (system, user)
}

/// `(system, user)` prompt pair for a naming request.
pub fn naming_prompts(req: &NamingRequest) -> (String, String) {
    let system = format!("{WRITING_SYSTEM_PROMPT}{NAMING_BLOCK}");

    let user = format!(
        "命名对象：{}\n{}\n性别倾向：{}\n风格偏好：{}\n关键词：{}\n背景描述：{}\n请按照系统要求命名并直接返回 JSON。",
        req.kind,
        naming_kind_hint(&req.kind).unwrap_or(""),
        req.gender,
        naming_style_hint(&req.style).unwrap_or(""),
        req.keywords,
        req.background
    );

    (system, user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continue_prompt_includes_optional_fields_in_order() {
        let req = ContinueWritingRequest {
            content: "他推开门。".to_string(),
            context: Some("末世废土".to_string()),
            style: Some("冷硬".to_string()),
            direction: Some("引入新人物".to_string()),
            length: 500,
        };
        let (system, user) = continue_writing_prompts(&req);
        assert!(system.starts_with(WRITING_SYSTEM_PROMPT));
        assert!(system.contains("续写专项要求"));
        assert!(user.contains("他推开门。"));
        assert!(user.contains("故事背景：末世废土"));
        assert!(user.contains("写作风格要求：冷硬"));
        assert!(user.contains("续写方向：引入新人物"));
        assert!(user.ends_with("请续写约500字的内容。"));
    }

    #[test]
    fn continue_prompt_omits_absent_fields() {
        let req = ContinueWritingRequest {
            content: "他推开门。".to_string(),
            context: None,
            style: None,
            direction: None,
            length: 800,
        };
        let (_, user) = continue_writing_prompts(&req);
        assert!(!user.contains("故事背景"));
        assert!(!user.contains("写作风格"));
        assert!(!user.contains("续写方向"));
        assert!(user.contains("约800字"));
    }

    #[test]
    fn outline_prompt_joins_characters_with_ideographic_comma() {
        let req = GenerateOutlineRequest {
            title: "星落".to_string(),
            genre: Some("科幻".to_string()),
            main_plot: None,
            characters: vec!["林舟".to_string(), "沈冰".to_string()],
            chapter_count: 12,
            style: None,
        };
        let (_, user) = generate_outline_prompts(&req);
        assert!(user.contains("《星落》"));
        assert!(user.contains("主要人物：林舟、沈冰"));
        assert!(user.contains("章节数量：12章"));
    }

    #[test]
    fn review_prompt_maps_known_focus_keys() {
        let req = ReviewRequest {
            content: "正文".to_string(),
            focus: vec!["pacing".to_string(), "bogus".to_string()],
        };
        let (_, user) = review_prompts(&req);
        assert!(user.contains("检查段落节奏"));
        assert!(!user.contains("bogus"));
    }

    #[test]
    fn review_prompt_falls_back_when_no_focus_matches() {
        let req = ReviewRequest {
            content: "正文".to_string(),
            focus: vec!["bogus".to_string()],
        };
        let (_, user) = review_prompts(&req);
        assert!(user.contains("综合评估"));
    }

    #[test]
    fn deconstruct_prompt_uses_placeholder_title() {
        let req = DeconstructRequest {
            content: "正文".to_string(),
            scope: "chapter".to_string(),
            title: None,
        };
        let (_, user) = deconstruct_prompts(&req);
        assert!(user.contains("作品标题：未命名作品"));
        assert!(user.contains("解析范围：chapter"));
    }

    #[test]
    fn naming_request_defaults_from_empty_body() {
        let req: NamingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.kind, "character");
        assert_eq!(req.gender, "any");
        assert_eq!(req.style, "classical");
        assert!(req.keywords.is_empty());
        assert!(req.background.is_empty());
    }

    #[test]
    fn naming_request_accepts_type_alias() {
        let req: NamingRequest =
            serde_json::from_str(r#"{"type": "location", "keywords": "雪山"}"#).unwrap();
        assert_eq!(req.kind, "location");
    }

    #[test]
    fn chat_request_sampling_fills_defaults() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"messages": [{"role": "user", "content": "hi"}], "temperature": 0.2}"#,
        )
        .unwrap();
        let sampling = req.sampling();
        assert_eq!(sampling.temperature, 0.2);
        assert_eq!(sampling.max_tokens, 2000);
        assert_eq!(sampling.top_p, 0.9);
    }
}
