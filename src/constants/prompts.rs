// Placeholders in braces are filled by the prompt builder. `{input_text}` is always
// substituted last.

pub const FLASHCARDS_PROMPT_EN: &str = r#"You are an expert flashcard creator tasked with generating high-quality, concise flashcards from the following text. Your goal is to capture the most important information in an easily digestible format.

Text: {input_text}

Instructions:
1. Thoroughly analyze the text and identify all key concepts, facts, or topics. Focus on {special_focus}.
2. Create a minimum of {min_cards} flashcards and a maximum of {max_cards} flashcards that cover the main ideas in the text.
3. For each identified element, create one question and one answer.
4. Questions should be {question_format}. Answers should be {answer_length}.
5. Present each flashcard as a question line followed directly by its answer line.
6. Use a blank line between flashcards for clear separation.
7. Do not number the flashcards and do not add labels, bullet points or markdown.
8. If the text contains fewer than {min_cards} distinct main ideas, create additional flashcards by breaking down complex concepts or exploring related subtopics.
9. Additional instructions: {special_instructions}.

Example format:
What is photosynthesis?
Process where plants convert sunlight into energy.

Who wrote "To Kill a Mockingbird"?
Harper Lee authored this classic American novel.

When did World War II end?
WWII concluded in 1945 with Axis powers' surrender.

Now, generate flashcards from the given text, adhering strictly to these guidelines."#;

pub const FLASHCARDS_PROMPT_AR: &str = r#"أنت خبير في إنشاء البطاقات التعليمية (الفلاش كارد) مكلف بإنتاج بطاقات تعليمية عالية الجودة وموجزة من النص التالي. هدفك هو التقاط أهم المعلومات في شكل سهل الاستيعاب.

النص: {input_text}

التعليمات:
1- قم بتحليل النص بدقة وحدد المفاهيم أو الحقائق أو المواضيع الرئيسية، مع التركيز على: {special_focus}.
2- أنشئ {min_cards} بطاقات تعليمية على الأقل و{max_cards} بطاقة على الأكثر.
3- لكل عنصر تم تحديده، أنشئ سؤالًا واحدًا وإجابة واحدة.
4- يجب أن تكون الأسئلة: {question_format}. ويجب أن تكون الإجابات: {answer_length}.
5- اكتب السؤال في سطر والإجابة في السطر التالي مباشرة.
6- ضع سطرًا فارغًا بين كل بطاقة وأخرى.
7- لا ترقّم البطاقات ولا تضف تسميات أو رموزًا.
8- تعليمات إضافية: {special_instructions}.

شكل المثال:
ما هي عاصمة السعودية
الرياض

متى انتهت الحرب العالمية الثانية
انتهت عام 1945 باستسلام دول المحور

والآن، قم بإنشاء البطاقات التعليمية من النص المعطى، ملتزمًا بدقة بهذه الإرشادات."#;

pub const FLASHCARDS_PROMPT_ZH: &str = r#"你是一名专业的学习卡片（闪卡）制作专家，需要根据以下文本生成高质量、简洁的闪卡，以易于理解的形式概括最重要的信息。

文本：{input_text}

要求：
1. 仔细分析文本，找出关键概念、事实或主题，重点关注：{special_focus}。
2. 至少生成 {min_cards} 张闪卡，最多生成 {max_cards} 张。
3. 每个要点对应一个问题和一个答案。
4. 问题应为：{question_format}。答案应为：{answer_length}。
5. 问题占一行，答案紧接在下一行。
6. 每张闪卡之间空一行。
7. 不要编号，不要添加标签、项目符号或 markdown。
8. 其他要求：{special_instructions}。

示例格式：
光合作用是什么？
植物利用阳光把二氧化碳和水转化为能量的过程。

第二次世界大战何时结束？
1945 年，以轴心国投降告终。

现在，请严格按照上述要求，根据给定文本生成闪卡。"#;

pub const DIAGRAM_PROMPT_EN: &str = r#"You are an expert Mermaid diagram creator specializing in educational content visualization. Analyze the following text and create a hierarchical Mermaid flowchart that summarizes its main concepts and the relationships between them.

Text to analyze: {input_text}

Instructions:
1. Identify main concepts, sub-concepts, and their relationships.
2. Start the diagram with `graph TD` for a top-down hierarchical layout.
3. Give every node a unique identifier followed by a label in square brackets, for example A[Main Concept].
4. Limit the diagram to 3-4 nodes per level for readability.
5. Connect nodes with `-->` for direct relationships, `---` for loose associations, `-.-` for optional relationships and `==>` for emphasized connections.
6. You may add clickable nodes linking to authoritative sources using: click nodeId "URL" "Hover text".

Example:
```mermaid
graph TD
    A[Main Concept] --> B[Sub-Concept 1]
    A --> C[Sub-Concept 2]
    B --> D[Detail 1]
    click A "https://en.wikipedia.org/wiki/Main_Concept" "Learn more"
```

Return only the Mermaid diagram."#;

pub const DIAGRAM_PROMPT_AR: &str = r#"أنت خبير في إنشاء مخططات Mermaid. مهمتك هي تحليل النص التالي وإنشاء مخطط Mermaid يلخص المفاهيم الرئيسية والعلاقات بينها.

النص: {input_text}

التعليمات:
1. قم بتحليل النص وتحديد المفاهيم والعلاقات الرئيسية.
2. ابدأ المخطط بـ graph TD.
3. أعط كل عقدة معرّفًا فريدًا متبوعًا بتسمية بين قوسين مربعين، مثل A[مفهوم].
4. استخدم الأسهم --> لتمثيل العلاقات بين المفاهيم.
5. تأكد من أن المخطط سهل القراءة ومنظم بشكل جيد.

مثال على صيغة Mermaid:
```mermaid
graph TD
    A[مفهوم 1] --> B[مفهوم 2]
    B --> C[مفهوم 3]
    C --> D[مفهوم 4]
```

أعد المخطط فقط."#;

pub const DIAGRAM_PROMPT_ZH: &str = r#"你是一名 Mermaid 图表专家。请分析以下文本，创建一个概括主要概念及其关系的 Mermaid 流程图。

文本：{input_text}

要求：
1. 找出文本中的主要概念、子概念及其关系。
2. 图表以 graph TD 开头。
3. 每个节点使用唯一标识符，后面紧跟方括号中的标签，例如 A[主要概念]。
4. 使用 --> 表示概念之间的关系。
5. 保持图表清晰、层次分明。

示例：
```mermaid
graph TD
    A[概念 1] --> B[概念 2]
    B --> C[概念 3]
```

只返回 Mermaid 图表。"#;

pub const STRICT_DIAGRAM_PROMPT_EN: &str = r#"Your previous Mermaid diagram was rejected because it did not contain {defect}.

Create a Mermaid flowchart for the text below and follow these rules exactly:
1. The first line must be exactly: graph TD
2. Every node must be written as an identifier immediately followed by a label in square brackets, for example A[Concept]. Identifiers use only letters, digits and underscores.
3. Include at least two nodes and at least one connection written as A[Concept] --> B[Other concept].
4. Put one statement per line.
5. Do not add explanations, headings or any text outside the diagram. Do not use code fences.
6. Write the node labels in the same language as the text.

Text: {input_text}"#;

pub const STRICT_DIAGRAM_PROMPT_AR: &str = r#"تم رفض مخطط Mermaid السابق لأنه لم يحتوِ على {defect}.

أنشئ مخطط Mermaid للنص أدناه واتبع هذه القواعد بدقة:
1. يجب أن يكون السطر الأول بالضبط: graph TD
2. اكتب كل عقدة كمعرّف يليه مباشرة تسمية بين قوسين مربعين، مثل A[مفهوم]. تتكون المعرّفات من حروف لاتينية وأرقام وشرطات سفلية فقط.
3. أضف عقدتين على الأقل واتصالًا واحدًا على الأقل بالشكل A[مفهوم] --> B[مفهوم آخر].
4. ضع عبارة واحدة في كل سطر.
5. لا تضف شروحات أو عناوين أو أي نص خارج المخطط، ولا تستخدم علامات الكود.
6. اكتب تسميات العقد بلغة النص نفسها.

النص: {input_text}"#;

pub const STRICT_DIAGRAM_PROMPT_ZH: &str = r#"你之前生成的 Mermaid 图表未被接受，因为其中缺少{defect}。

请为下面的文本创建 Mermaid 流程图，并严格遵守以下规则：
1. 第一行必须是：graph TD
2. 每个节点写成标识符后紧跟方括号标签，例如 A[概念]。标识符只能包含英文字母、数字和下划线。
3. 至少包含两个节点和一条连接，写法如 A[概念] --> B[另一个概念]。
4. 每行只写一条语句。
5. 不要添加解释、标题或图表之外的任何文字，也不要使用代码块标记。
6. 节点标签使用与文本相同的语言。

文本：{input_text}"#;
